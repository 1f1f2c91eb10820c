//! Published OAuth 1.0a test vectors, fed through raw HTTP requests.

#[cfg(test)]
mod tests {
    use oauth1_auth::{sign, signature_base_string, verify};

    use crate::{form_request, init_tracing, view_of};

    /// RFC 5849 section 3.4.1 example, with the protocol parameters moved
    /// from the `Authorization` header into the form body.
    const RFC5849_BODY: &str = "c2&a3=2+q\
        &oauth_consumer_key=9djdj82h48djs9d2\
        &oauth_token=kkk9d7dh3k39sjv7\
        &oauth_signature_method=HMAC-SHA1\
        &oauth_timestamp=137131201\
        &oauth_nonce=7d8f3e4a";

    #[test]
    fn test_should_build_rfc5849_base_string() {
        init_tracing();

        let request = form_request(
            "POST",
            "http://example.com/request?b5=%3D%253D&a3=a&c%40=&a2=r%20b",
            RFC5849_BODY.as_bytes().to_vec(),
        )
        .unwrap();
        let view = view_of(request).unwrap();
        let base_string = signature_base_string(&view);
        tracing::info!(%base_string, "rfc 5849 base string");

        assert_eq!(
            base_string,
            "POST&http%3A%2F%2Fexample.com%2Frequest&a2%3Dr%2520b%26a3%3D2%2520q\
             %26a3%3Da%26b5%3D%253D%25253D%26c%2540%3D%26c2%3D%26oauth_consumer_key\
             %3D9djdj82h48djs9d2%26oauth_nonce%3D7d8f3e4a%26oauth_signature_method\
             %3DHMAC-SHA1%26oauth_timestamp%3D137131201%26oauth_token%3Dkkk9d7dh3k39sjv7"
        );
        assert_eq!(
            sign(&view, "j49sk3j29djd", "dh893hdasih9").unwrap(),
            "r6/TJjbCOr97/+UU0NsvSne7s5g="
        );
    }

    #[test]
    fn test_should_verify_twitter_example_request() {
        init_tracing();

        let body = "status=Hello%20Ladies%20%2b%20Gentlemen%2c%20a%20signed%20OAuth%20request%21\
            &oauth_consumer_key=xvz1evFS4wEEPTGEFPHBog\
            &oauth_nonce=kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\
            &oauth_signature=hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\
            &oauth_signature_method=HMAC-SHA1\
            &oauth_timestamp=1318622958\
            &oauth_token=370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb\
            &oauth_version=1.0";
        let request = form_request(
            "POST",
            "https://api.twitter.com/1.1/statuses/update.json?include_entities=true",
            body.as_bytes().to_vec(),
        )
        .unwrap();
        let view = view_of(request).unwrap();

        assert!(
            verify(
                &view,
                "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw",
                "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE",
            )
            .unwrap()
        );
    }
}
