use crate::models::{date_window::DATE_FORMAT, error::AppError};
use chrono::NaiveDate;
use reqwest::Url;
use wasm_bindgen::JsValue;

pub const NOW_PARAM: &str = "now";
pub const BG_COLOR_PARAM: &str = "bgColor";
pub const TEXT_COLOR_PARAM: &str = "textColor";

/// Query parameters the panel reads from and writes back to the page URL.
///
/// `bg_color` and `text_color` are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlState {
    pub now: Option<String>,
    pub bg_color: Option<String>,
    pub text_color: Option<String>,
}

impl UrlState {
    /// Reads the known parameters from a full URL. First occurrence wins.
    pub fn from_href(href: &str) -> Result<Self, AppError> {
        let url = Url::parse(href).map_err(|e| AppError::ConfigError(format!("Bad page URL: {e}")))?;

        let mut state = Self::default();
        for (name, value) in url.query_pairs() {
            let slot = match &*name {
                NOW_PARAM => &mut state.now,
                BG_COLOR_PARAM => &mut state.bg_color,
                TEXT_COLOR_PARAM => &mut state.text_color,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        Ok(state)
    }

    pub fn with_date(&self, date: NaiveDate) -> Self {
        Self {
            now: Some(date.format(DATE_FORMAT).to_string()),
            ..self.clone()
        }
    }

    /// Parameters to publish, `now` first, absent ones skipped.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (NOW_PARAM, &self.now),
            (BG_COLOR_PARAM, &self.bg_color),
            (TEXT_COLOR_PARAM, &self.text_color),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
        .collect()
    }

    /// Rewrites the query of `href` to this state, keeping path and fragment.
    pub fn to_href(&self, href: &str) -> Result<String, AppError> {
        let mut url =
            Url::parse(href).map_err(|e| AppError::ConfigError(format!("Bad page URL: {e}")))?;

        let pairs = self.query_pairs();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
        Ok(url.into())
    }
}

/// Reads the URL state of the current page.
pub fn read_page_state() -> Result<UrlState, AppError> {
    let href = web_sys::window()
        .ok_or_else(|| AppError::ConfigError("No window".to_string()))?
        .location()
        .href()
        .map_err(|e| AppError::ConfigError(format!("Cannot read location: {e:?}")))?;

    UrlState::from_href(&href)
}

/// Replaces the current history entry with `state`, without a reload.
pub fn publish_page_state(state: &UrlState) -> Result<(), AppError> {
    let window = web_sys::window().ok_or_else(|| AppError::ConfigError("No window".to_string()))?;

    let href = window
        .location()
        .href()
        .map_err(|e| AppError::ConfigError(format!("Cannot read location: {e:?}")))?;
    let next = state.to_href(&href)?;

    window
        .history()
        .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&next)))
        .map_err(|e| AppError::ConfigError(format!("Cannot update URL: {e:?}")))
}
