use sqlx::PgPool;

use crate::errors::AppError;
use crate::ua;
use super::form::CleanedFeedback;
use super::types::*;

const OPINION_COLUMNS: &str = "id, opinion_type, url, description, user_agent, locale, \
                               manufacturer, device, product, version, platform, created_at";

/// Map a validated form onto the row to insert.
///
/// The URL is dropped unless the submitter ticked the opt-in box and gave
/// one; broken-site reports always keep it. Fails without building anything
/// if `type_code` is not a known opinion type.
pub fn build_opinion(
    type_code: i32,
    cleaned: &CleanedFeedback,
    user_agent: &str,
    locale: &str,
) -> Result<NewOpinion, AppError> {
    let keep_url = type_code == OpinionType::Broken.code() || (cleaned.add_url && !cleaned.url.is_empty());
    let url = if keep_url { cleaned.url.clone() } else { String::new() };

    let opinion_type = OpinionType::try_from(type_code)?;

    let (product, version, platform) = match ua::parse(user_agent) {
        Some(parsed) => (
            parsed.browser.short().to_string(),
            parsed.version,
            parsed.platform.short().to_string(),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    Ok(NewOpinion {
        opinion_type,
        url,
        description: cleaned.description.clone(),
        user_agent: user_agent.to_string(),
        locale: locale.to_string(),
        manufacturer: cleaned.manufacturer.clone(),
        device: cleaned.device.clone(),
        product,
        version,
        platform,
    })
}

/// Insert one opinion and return the stored row.
pub async fn create(pool: &PgPool, new: &NewOpinion) -> Result<Opinion, AppError> {
    let sql = format!(
        "INSERT INTO opinions \
             (opinion_type, url, description, user_agent, locale, manufacturer, device, product, version, platform) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         RETURNING {OPINION_COLUMNS}"
    );

    let opinion = sqlx::query_as::<_, Opinion>(&sql)
        .bind(new.opinion_type)
        .bind(&new.url)
        .bind(&new.description)
        .bind(&new.user_agent)
        .bind(&new.locale)
        .bind(&new.manufacturer)
        .bind(&new.device)
        .bind(&new.product)
        .bind(&new.version)
        .bind(&new.platform)
        .fetch_one(pool)
        .await
        .map_err(AppError::Db)?;

    Ok(opinion)
}

/// Find a single opinion by id.
pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Opinion>, AppError> {
    let sql = format!("SELECT {OPINION_COLUMNS} FROM opinions WHERE id = $1");
    let opinion = sqlx::query_as::<_, Opinion>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(opinion)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FX4_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.6; rv:2.0) Gecko/20100101 Firefox/4.0";

    fn cleaned(url: &str, add_url: bool) -> CleanedFeedback {
        CleanedFeedback {
            description: "crashes on load".to_string(),
            url: url.to_string(),
            add_url,
            manufacturer: String::new(),
            device: String::new(),
        }
    }

    #[test]
    fn url_dropped_without_opt_in() {
        for kind in [OpinionType::Praise, OpinionType::Issue, OpinionType::Idea] {
            let new = build_opinion(kind.code(), &cleaned("http://example.com", false), FX4_MAC, "en-US").unwrap();
            assert_eq!(new.url, "");
            assert_eq!(new.opinion_type, kind);
        }
    }

    #[test]
    fn url_kept_with_opt_in() {
        let new = build_opinion(OpinionType::Issue.code(), &cleaned("http://example.com", true), FX4_MAC, "de").unwrap();
        assert_eq!(new.url, "http://example.com");
        assert_eq!(new.locale, "de");
    }

    #[test]
    fn broken_reports_always_keep_url() {
        let new = build_opinion(OpinionType::Broken.code(), &cleaned("http://broken.example", false), FX4_MAC, "en-US").unwrap();
        assert_eq!(new.url, "http://broken.example");
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = build_opinion(99, &cleaned("", false), FX4_MAC, "en-US").unwrap_err();
        assert!(matches!(err, AppError::UnknownOpinionType(99)));
    }

    #[test]
    fn user_agent_fields_are_derived() {
        let new = build_opinion(OpinionType::Praise.code(), &cleaned("", false), FX4_MAC, "en-US").unwrap();
        assert_eq!(new.product, "firefox");
        assert_eq!(new.version, "4.0");
        assert_eq!(new.platform, "mac");
        assert_eq!(new.user_agent, FX4_MAC);
    }
}
