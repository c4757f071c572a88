use super::{CreateAdBody, MusicOption, Objective};

pub const MIN_CAMPAIGN_NAME_CHARS: usize = 3;
pub const MAX_AD_TEXT_CHARS: usize = 100;

pub const CAMPAIGN_NAME_TOO_SHORT: &str = "Campaign name must be at least 3 characters";
pub const OBJECTIVE_NOT_RECOGNIZED: &str = r#"Objective must be "traffic" or "conversions""#;
pub const AD_TEXT_OUT_OF_RANGE: &str = "Ad text is required and must be 1-100 characters";
pub const MUSIC_REQUIRED_FOR_CONVERSIONS: &str = "Music is required for Conversions objective";
pub const MUSIC_ID_REQUIRED_FOR_EXISTING: &str =
    "Please provide a musicId when using an existing music option";

/// An ad submission that passed every rule, normalized for storage.
#[derive(Clone, Debug, PartialEq)]
pub struct AdDraft {
    pub campaign_name: String,
    pub objective: Objective,
    pub ad_text: String,
    pub cta: String,
    pub music_option: MusicOption,
    pub music_id: String,
}

/// Checks every rule and reports all failures together, in rule order.
pub fn validate_ad(body: &CreateAdBody) -> Result<AdDraft, Vec<String>> {
    let mut errors = vec![];

    let campaign_name = body
        .campaign_name
        .as_deref()
        .filter(|name| name.trim().chars().count() >= MIN_CAMPAIGN_NAME_CHARS);
    if campaign_name.is_none() {
        errors.push(CAMPAIGN_NAME_TOO_SHORT.to_string());
    }

    let objective = body
        .objective
        .as_deref()
        .and_then(|objective| objective.parse::<Objective>().ok());
    if objective.is_none() {
        errors.push(OBJECTIVE_NOT_RECOGNIZED.to_string());
    }

    let ad_text = body
        .ad_text
        .as_deref()
        .filter(|text| (1..=MAX_AD_TEXT_CHARS).contains(&text.trim().chars().count()));
    if ad_text.is_none() {
        errors.push(AD_TEXT_OUT_OF_RANGE.to_string());
    }

    let music_option = body
        .music_option
        .clone()
        .filter(|option| !option.is_empty())
        .map(MusicOption::from)
        .unwrap_or_default();
    let music_id = body.music_id.as_deref().unwrap_or_default();

    if objective == Some(Objective::Conversions) {
        if music_option == MusicOption::None {
            errors.push(MUSIC_REQUIRED_FOR_CONVERSIONS.to_string());
        }
        if music_option == MusicOption::Existing && music_id.is_empty() {
            errors.push(MUSIC_ID_REQUIRED_FOR_EXISTING.to_string());
        }
    }

    match (campaign_name, objective, ad_text) {
        (Some(campaign_name), Some(objective), Some(ad_text)) if errors.is_empty() => Ok(AdDraft {
            campaign_name: campaign_name.to_string(),
            objective,
            ad_text: ad_text.to_string(),
            cta: body.cta.clone().unwrap_or_default(),
            music_option,
            music_id: music_id.to_string(),
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(campaign_name: &str, objective: &str, ad_text: &str) -> CreateAdBody {
        CreateAdBody {
            campaign_name: Some(campaign_name.to_string()),
            objective: Some(objective.to_string()),
            ad_text: Some(ad_text.to_string()),
            cta: Some("Learn More".to_string()),
            music_option: Some("none".to_string()),
            music_id: None,
        }
    }

    #[test]
    fn accepts_traffic_ad_without_music() {
        let draft = validate_ad(&body("My Campaign", "traffic", "Nice creative")).unwrap();

        assert_eq!(draft.campaign_name, "My Campaign");
        assert_eq!(draft.objective, Objective::Traffic);
        assert_eq!(draft.ad_text, "Nice creative");
        assert_eq!(draft.cta, "Learn More");
        assert_eq!(draft.music_option, MusicOption::None);
        assert_eq!(draft.music_id, "");
    }

    #[test]
    fn keeps_campaign_name_untrimmed() {
        let draft = validate_ad(&body("  Summer  ", "Traffic", "Go")).unwrap();

        assert_eq!(draft.campaign_name, "  Summer  ");
        assert_eq!(draft.objective, Objective::Traffic);
    }

    #[test]
    fn reports_every_failing_rule() {
        let errors = validate_ad(&body("A", "invalid", "")).unwrap_err();

        assert_eq!(
            errors,
            vec![
                CAMPAIGN_NAME_TOO_SHORT.to_string(),
                OBJECTIVE_NOT_RECOGNIZED.to_string(),
                AD_TEXT_OUT_OF_RANGE.to_string(),
            ]
        );
    }

    #[test]
    fn empty_body_fails_three_rules() {
        let errors = validate_ad(&CreateAdBody::default()).unwrap_err();

        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn whitespace_only_fields_are_rejected() {
        let errors = validate_ad(&body("   ab   ", "traffic", "    ")).unwrap_err();

        assert_eq!(
            errors,
            vec![
                CAMPAIGN_NAME_TOO_SHORT.to_string(),
                AD_TEXT_OUT_OF_RANGE.to_string(),
            ]
        );
    }

    #[test]
    fn ad_text_is_limited_to_one_hundred_chars() {
        let at_limit = "é".repeat(MAX_AD_TEXT_CHARS);
        assert!(validate_ad(&body("Campaign", "traffic", &at_limit)).is_ok());

        let over_limit = "x".repeat(MAX_AD_TEXT_CHARS + 1);
        let errors = validate_ad(&body("Campaign", "traffic", &over_limit)).unwrap_err();
        assert_eq!(errors, vec![AD_TEXT_OUT_OF_RANGE.to_string()]);

        let padded = format!("  {}  ", "x".repeat(MAX_AD_TEXT_CHARS));
        assert!(validate_ad(&body("Campaign", "traffic", &padded)).is_ok());
    }

    #[test]
    fn conversions_require_music() {
        let errors = validate_ad(&body("Campaign", "conversions", "Buy now")).unwrap_err();
        assert_eq!(errors, vec![MUSIC_REQUIRED_FOR_CONVERSIONS.to_string()]);

        let mut missing_option = body("Campaign", "conversions", "Buy now");
        missing_option.music_option = None;
        let errors = validate_ad(&missing_option).unwrap_err();
        assert_eq!(errors, vec![MUSIC_REQUIRED_FOR_CONVERSIONS.to_string()]);
    }

    #[test]
    fn existing_music_requires_an_id() {
        let mut existing = body("Campaign", "conversions", "Buy now");
        existing.music_option = Some("existing".to_string());
        let errors = validate_ad(&existing).unwrap_err();
        assert_eq!(errors, vec![MUSIC_ID_REQUIRED_FOR_EXISTING.to_string()]);

        existing.music_id = Some("music_001".to_string());
        let draft = validate_ad(&existing).unwrap();
        assert_eq!(draft.music_option, MusicOption::Existing);
        assert_eq!(draft.music_id, "music_001");
    }

    #[test]
    fn custom_music_needs_no_id() {
        let mut custom = body("Campaign", "conversions", "Buy now");
        custom.music_option = Some("custom".to_string());

        assert!(validate_ad(&custom).is_ok());
    }

    #[test]
    fn traffic_ignores_missing_music_id() {
        let mut existing = body("Campaign", "traffic", "Visit us");
        existing.music_option = Some("existing".to_string());

        assert!(validate_ad(&existing).is_ok());
    }

    #[test]
    fn unrecognized_music_option_is_stored_as_given() {
        let mut capitalized = body("Campaign", "traffic", "Visit us");
        capitalized.music_option = Some("Existing".to_string());

        let draft = validate_ad(&capitalized).unwrap();
        assert_eq!(draft.music_option, MusicOption::Other("Existing".to_string()));

        // only the exact names take part in the conversions rule
        capitalized.objective = Some("conversions".to_string());
        assert!(validate_ad(&capitalized).is_ok());

        capitalized.music_option = Some("NONE".to_string());
        assert!(validate_ad(&capitalized).is_ok());
    }
}
