//! Sign-then-verify integration tests over HTTP requests.

#[cfg(test)]
mod tests {
    use oauth1_auth::{
        AuthError, OAuth1Verifier, RequestView, StaticCredentialProvider, VerifierConfig, verify,
    };

    use crate::{form_body, form_request, init_tracing, sign_form_request, view_of};

    const CONSUMER_KEY: &str = "dpf43f3p2l4k3l03";
    const CONSUMER_SECRET: &str = "kd94hf93k423kf44";
    const TOKEN: &str = "nnch734d00sl2jdk";
    const TOKEN_SECRET: &str = "pfkkdhi9sl3r4s00";
    const URI: &str = "https://Photos.Example.net/Photos?file=vacation.jpg&size=original";

    fn oauth_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("oauth_consumer_key", CONSUMER_KEY),
            ("oauth_token", TOKEN),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1191242096"),
            ("oauth_nonce", "kllo9940pd9333jh"),
            ("oauth_version", "1.0"),
            ("caption", "sunset + sea, día 1"),
        ]
    }

    fn verifier() -> OAuth1Verifier<StaticCredentialProvider> {
        let provider = StaticCredentialProvider::new(vec![(
            CONSUMER_KEY.to_owned(),
            CONSUMER_SECRET.to_owned(),
        )])
        .with_tokens(vec![(TOKEN.to_owned(), TOKEN_SECRET.to_owned())]);
        OAuth1Verifier::new(VerifierConfig::default(), provider)
    }

    #[test]
    fn test_should_authenticate_client_signed_request() {
        init_tracing();

        let request =
            sign_form_request("post", URI, &oauth_pairs(), CONSUMER_SECRET, TOKEN_SECRET).unwrap();
        let result = verifier().authenticate(&view_of(request).unwrap()).unwrap();
        tracing::info!(?result, "authenticated request");

        assert_eq!(result.consumer_key, CONSUMER_KEY);
        assert_eq!(result.token.as_deref(), Some(TOKEN));
    }

    #[test]
    fn test_should_verify_with_free_function() {
        init_tracing();

        let request =
            sign_form_request("GET", URI, &oauth_pairs(), CONSUMER_SECRET, TOKEN_SECRET).unwrap();
        let view = view_of(request).unwrap();

        assert!(verify(&view, CONSUMER_SECRET, TOKEN_SECRET).unwrap());
        assert!(!verify(&view, CONSUMER_SECRET, "wrong").unwrap());
    }

    #[test]
    fn test_should_reject_request_with_changed_body_parameter() {
        init_tracing();

        let signed =
            sign_form_request("POST", URI, &oauth_pairs(), CONSUMER_SECRET, TOKEN_SECRET).unwrap();
        let signature = view_of(signed)
            .unwrap()
            .form_parameter("oauth_signature")
            .map(ToOwned::to_owned)
            .unwrap();

        let mut tampered: Vec<(&str, &str)> = oauth_pairs();
        tampered.retain(|(k, _)| *k != "caption");
        tampered.push(("caption", "sunset"));
        tampered.push(("oauth_signature", &signature));
        let request = form_request("POST", URI, form_body(&tampered)).unwrap();

        let result = verifier().authenticate(&view_of(request).unwrap());
        assert!(matches!(result, Err(AuthError::SignatureDoesNotMatch)));
    }

    #[test]
    fn test_should_reject_unsigned_request() {
        init_tracing();

        let request = form_request("POST", URI, form_body(&oauth_pairs())).unwrap();
        let view = view_of(request).unwrap();

        assert!(!verify(&view, CONSUMER_SECRET, TOKEN_SECRET).unwrap());
        assert!(matches!(
            verifier().authenticate(&view),
            Err(AuthError::MissingSignature)
        ));
    }

    #[test]
    fn test_should_ignore_parameter_order_on_the_wire() {
        init_tracing();

        let signed =
            sign_form_request("POST", URI, &oauth_pairs(), CONSUMER_SECRET, TOKEN_SECRET).unwrap();
        let signature = view_of(signed)
            .unwrap()
            .form_parameter("oauth_signature")
            .map(ToOwned::to_owned)
            .unwrap();

        let mut reordered: Vec<(&str, &str)> = oauth_pairs();
        reordered.reverse();
        reordered.insert(0, ("oauth_signature", &signature));
        let request = form_request(
            "POST",
            "https://photos.example.net/photos?size=original&file=vacation.jpg",
            form_body(&reordered),
        )
        .unwrap();

        assert!(verifier().authenticate(&view_of(request).unwrap()).is_ok());
    }
}
