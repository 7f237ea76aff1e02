use super::*;

#[test]
fn creations_endpoint_path() {
    assert_eq!(CREATIONS_ENDPOINT, "/api/creations");
}

#[test]
fn status_error_formats_code() {
    assert_eq!(FetchError::Status(503).to_string(), "creations request failed: 503");
}

#[test]
fn decode_error_formats_reason() {
    let err = FetchError::Decode("expected a sequence".to_owned());
    assert_eq!(err.to_string(), "invalid creations payload: expected a sequence");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn fetch_outside_browser_is_unavailable() {
    let result = block_on(fetch_creations());
    assert_eq!(result, Err(FetchError::Unavailable));
}

/// Drive a future that never suspends.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
