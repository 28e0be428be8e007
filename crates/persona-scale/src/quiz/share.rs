//! Shareable answer codes carried in a `?results=` query parameter.

use super::answers::{AnswerError, AnswerSet, ItemId};
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use std::collections::BTreeMap;
use tracing::debug;

pub const SHARE_PARAM: &str = "results";
/// Links longer than this are refused; many chat clients truncate them.
pub const MAX_SHARE_URL_LEN: usize = 2000;

#[derive(Debug, thiserror::Error)]
pub enum ShareCodeError {
    #[error("share link query is not valid UTF-8 once unescaped")]
    Query(#[source] std::string::FromUtf8Error),
    #[error("share code is not valid base64")]
    Encoding(#[source] base64::DecodeError),
    #[error("share code does not contain an answer map: {0}")]
    Payload(#[source] serde_json::Error),
    #[error(transparent)]
    Answers(#[from] AnswerError),
    #[error("failed to encode answers: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("share link is {length} characters; the limit is {MAX_SHARE_URL_LEN}")]
    TooLong { length: usize },
}

pub fn encode_answers(answers: &AnswerSet) -> Result<String, ShareCodeError> {
    let json = serde_json::to_vec(answers).map_err(ShareCodeError::Encode)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Accepts URL-safe unpadded codes and the standard alphabet with padding.
/// A space is read as `+`, which form-encoded query strings turn it into.
pub fn decode_answers(code: &str) -> Result<AnswerSet, ShareCodeError> {
    let code = code.trim().replace(' ', "+");
    let bytes = URL_SAFE_NO_PAD
        .decode(code.trim_end_matches('='))
        .or_else(|_| STANDARD.decode(&code))
        .map_err(ShareCodeError::Encoding)?;

    let scores: BTreeMap<ItemId, u8> =
        serde_json::from_slice(&bytes).map_err(ShareCodeError::Payload)?;
    Ok(AnswerSet::from_pairs(scores)?)
}

pub fn build_share_url(base_url: &str, answers: &AnswerSet) -> Result<String, ShareCodeError> {
    let code = encode_answers(answers)?;
    let base = base_url.split(['?', '#']).next().unwrap_or(base_url);
    let url = format!("{base}?{SHARE_PARAM}={code}");

    if url.len() > MAX_SHARE_URL_LEN {
        return Err(ShareCodeError::TooLong { length: url.len() });
    }
    debug!(length = url.len(), answered = answers.len(), "share link built");
    Ok(url)
}

/// Reads answers from a share link. Returns `Ok(None)` when the link has no
/// `results` parameter.
pub fn answers_from_url(url: &str) -> Result<Option<AnswerSet>, ShareCodeError> {
    let Some(payload) = query_param(url, SHARE_PARAM)? else {
        return Ok(None);
    };
    if payload.is_empty() {
        return Ok(None);
    }
    decode_answers(&payload).map(Some)
}

fn query_param(url: &str, name: &str) -> Result<Option<String>, ShareCodeError> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let Some((_, query)) = without_fragment.split_once('?') else {
        return Ok(None);
    };

    let Some(raw) = query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == name).then_some(value)
    }) else {
        return Ok(None);
    };

    let value = urlencoding::decode(raw).map_err(ShareCodeError::Query)?;
    Ok(Some(value.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnswerSet {
        AnswerSet::from_pairs([(1, 7), (2, 1), (48, 4)]).unwrap()
    }

    #[test]
    fn share_link_carries_answers_back() {
        let url = build_share_url("https://quiz.example/app/?lang=zh#top", &sample()).unwrap();
        assert!(url.starts_with("https://quiz.example/app/?results="));
        assert_eq!(url.matches('=').count(), 1);

        let restored = answers_from_url(&url).unwrap().expect("results param");
        assert_eq!(restored, sample());
    }

    #[test]
    fn standard_alphabet_codes_still_decode() {
        let code = STANDARD.encode(br#"{"1":7,"2":1,"48":4}"#);
        assert_eq!(decode_answers(&code).unwrap(), sample());

        let escaped = code.replace('=', "%3D");
        let url = format!("http://localhost/?results={escaped}&x=1");
        assert_eq!(answers_from_url(&url).unwrap(), Some(sample()));
    }

    #[test]
    fn query_escapes_are_decoded_strictly() {
        let url = "http://localhost/?results=%+7B%zz%3D";
        assert_eq!(
            query_param(url, SHARE_PARAM).unwrap().as_deref(),
            Some("%+7B%zz=")
        );

        let invalid_utf8 = "http://localhost/?results=%FF%FE";
        assert!(matches!(
            answers_from_url(invalid_utf8),
            Err(ShareCodeError::Query(_))
        ));
    }

    #[test]
    fn missing_parameter_is_not_an_error() {
        assert!(answers_from_url("http://localhost/").unwrap().is_none());
        assert!(answers_from_url("http://localhost/?other=1").unwrap().is_none());
        assert!(answers_from_url("http://localhost/?results=").unwrap().is_none());
    }

    #[test]
    fn malformed_codes_are_rejected() {
        assert!(matches!(
            decode_answers("!!!"),
            Err(ShareCodeError::Encoding(_))
        ));
        let not_a_map = URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        assert!(matches!(
            decode_answers(&not_a_map),
            Err(ShareCodeError::Payload(_))
        ));
        let out_of_range = URL_SAFE_NO_PAD.encode(br#"{"5":9}"#);
        assert!(matches!(
            decode_answers(&out_of_range),
            Err(ShareCodeError::Answers(_))
        ));
    }

    #[test]
    fn overlong_links_are_refused() {
        let base = format!("http://localhost/{}", "a".repeat(MAX_SHARE_URL_LEN));
        assert!(matches!(
            build_share_url(&base, &sample()),
            Err(ShareCodeError::TooLong { .. })
        ));
    }
}
