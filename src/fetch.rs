use crate::error::FetchError;
use crate::model::{ApiResponse, RawQuestion};

/// Turns an HTTP answer from the trivia API into question records.
///
/// A non-2xx status, a body that is not the expected JSON, a non-zero
/// `response_code` or an empty result list all count as a failed load.
pub fn parse_response(
    status: u16,
    http_ok: bool,
    body: &str,
) -> Result<Vec<RawQuestion>, FetchError> {
    if !http_ok {
        return Err(FetchError::FetchFailed(format!(
            "trivia API returned HTTP {status}"
        )));
    }

    let parsed: ApiResponse = serde_json::from_str(body)
        .map_err(|err| FetchError::FetchFailed(format!("invalid JSON from trivia API: {err}")))?;

    if parsed.response_code != 0 || parsed.results.is_empty() {
        return Err(FetchError::NoResults {
            response_code: parsed.response_code,
        });
    }

    Ok(parsed.results)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn fetch_questions(endpoint: &str) -> Result<Vec<RawQuestion>, FetchError> {
    use crate::config::REQUEST_TIMEOUT_SECS;

    fetch_with_timeout(endpoint, std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_with_timeout(
    endpoint: &str,
    timeout: std::time::Duration,
) -> Result<Vec<RawQuestion>, FetchError> {
    use reqwest::header::{ACCEPT, USER_AGENT};

    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|err| FetchError::FetchFailed(format!("could not build HTTP client: {err}")))?;

    let response = client
        .get(endpoint)
        .header(USER_AGENT, concat!("Quizzical/", env!("CARGO_PKG_VERSION")))
        .header(ACCEPT, "application/json")
        .send()
        .map_err(|err| FetchError::FetchFailed(format!("error connecting to {endpoint}: {err}")))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|err| FetchError::FetchFailed(format!("could not read response body: {err}")))?;

    parse_response(status.as_u16(), status.is_success(), &body)
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch_questions(endpoint: &str) -> Result<Vec<RawQuestion>, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let window = web_sys::window()
        .ok_or_else(|| FetchError::FetchFailed("no window in WASM environment".into()))?;

    let request = Request::new_with_str_and_init(endpoint, &opts)
        .map_err(|err| FetchError::FetchFailed(format!("could not create request: {err:?}")))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| FetchError::FetchFailed(format!("fetch failed: {err:?}")))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::FetchFailed("fetch did not return a Response".into()))?;

    let text_promise = response
        .text()
        .map_err(|err| FetchError::FetchFailed(format!("could not read body: {err:?}")))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| FetchError::FetchFailed(format!("could not read body: {err:?}")))?
        .as_string()
        .ok_or_else(|| FetchError::FetchFailed("response body is not text".into()))?;

    parse_response(response.status(), response.ok(), &text)
}


#[cfg(test)]
mod tests {
    use super::*;
    use super::test_server::FIVE_RESULTS;

    #[test]
    fn well_formed_body_yields_records() {
        let records = parse_response(200, true, FIVE_RESULTS).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].correct_answer, "Paris");
        assert_eq!(records[4].question, "Who wrote &quot;Hamlet&quot;?");
        assert_eq!(records[3].incorrect_answers, vec!["6", "10", "12"]);
    }

    #[test]
    fn non_zero_response_code_is_no_results() {
        let err = parse_response(200, true, r#"{"response_code":1,"results":[]}"#).unwrap_err();
        assert_eq!(err, FetchError::NoResults { response_code: 1 });
        assert_eq!(err.to_string(), "No results found");
    }

    #[test]
    fn empty_results_with_success_code_is_no_results() {
        let err = parse_response(200, true, r#"{"response_code":0,"results":[]}"#).unwrap_err();
        assert!(matches!(err, FetchError::NoResults { response_code: 0 }));
    }

    #[test]
    fn http_error_status_fails_even_with_valid_body() {
        let err = parse_response(503, false, FIVE_RESULTS).unwrap_err();
        assert!(matches!(err, FetchError::FetchFailed(_)));
        assert_eq!(err.to_string(), "Failed to fetch quiz");
        assert!(err.detail().contains("503"));
    }

    #[test]
    fn malformed_json_fails() {
        let err = parse_response(200, true, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::FetchFailed(_)));
        let missing_code = parse_response(200, true, r#"{"results":[]}"#).unwrap_err();
        assert!(matches!(missing_code, FetchError::FetchFailed(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    mod over_http {
        use super::super::test_server::{FIVE_RESULTS, refused_url, serve_once, serve_silently};
        use super::super::*;
        use std::time::Duration;

        #[test]
        fn ok_response_yields_five_records() {
            let url = serve_once("200 OK", FIVE_RESULTS);
            let records = fetch_questions(&url).unwrap();
            assert_eq!(records.len(), 5);
            assert_eq!(records[1].correct_answer, "Mars");
        }

        #[test]
        fn response_code_one_is_no_results() {
            let url = serve_once("200 OK", r#"{"response_code":1,"results":[]}"#);
            let err = fetch_questions(&url).unwrap_err();
            assert_eq!(err, FetchError::NoResults { response_code: 1 });
        }

        #[test]
        fn server_error_status_fails() {
            let url = serve_once("500 Internal Server Error", "oops");
            let err = fetch_questions(&url).unwrap_err();
            assert_eq!(err.to_string(), "Failed to fetch quiz");
            assert!(err.detail().contains("500"));
        }

        #[test]
        fn refused_connection_fails() {
            let err = fetch_questions(&refused_url()).unwrap_err();
            assert!(matches!(err, FetchError::FetchFailed(_)));
        }

        #[test]
        fn slow_server_hits_the_timeout() {
            let url = serve_silently(Duration::from_secs(3));
            let err = fetch_with_timeout(&url, Duration::from_millis(300)).unwrap_err();
            assert!(matches!(err, FetchError::FetchFailed(_)));
        }
    }
}
