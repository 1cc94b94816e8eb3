//! Property-based tests for tokens and credential checks

use std::sync::Arc;

use chrono::{Duration, Utc};
use proptest::prelude::*;

use user_service::backend::auth::{AuthError, AuthService, TokenCodec, TokenError};
use user_service::backend::users::{
    CreateUser, InMemoryUserRepository, Role, UserService, UserServiceError,
};

fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9._]{1,16}", "[a-z0-9]{1,12}\\.[a-z]{2,4}")
        .prop_map(|(local, domain)| format!("{local}@{domain}"))
}

proptest! {
    #[test]
    fn test_token_carries_email(email in email_strategy(), secret in "[ -~]{1,64}") {
        let codec = TokenCodec::new(&secret);
        let token = codec.sign(&email).unwrap();
        let claims = codec.verify(&token).unwrap();

        prop_assert_eq!(claims.email, email);
        prop_assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_token_rejected_under_other_secret(
        email in email_strategy(),
        secret in "[a-z]{8,32}",
        other in "[A-Z]{8,32}",
    ) {
        let token = TokenCodec::new(&secret).sign(&email).unwrap();
        let result = TokenCodec::new(&other).verify(&token);
        prop_assert_eq!(result.unwrap_err(), TokenError::BadSignature);
    }

    #[test]
    fn test_token_expiry_boundary(email in email_strategy(), hours_ago in 0i64..48) {
        // exactly 24h lands on the current second; skip the tie
        prop_assume!(hours_ago != 24);
        let codec = TokenCodec::new("expiry-secret");
        let issued = Utc::now() - Duration::hours(hours_ago);
        let token = codec.sign_at(&email, issued).unwrap();
        let result = codec.verify(&token);

        if hours_ago < 24 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err(), TokenError::Expired);
        }
    }

    #[test]
    fn test_email_without_at_sign_rejected(email in "[a-z0-9._ -]{0,24}") {
        let users = UserService::new(Arc::new(InMemoryUserRepository::new()), 4);
        let result = tokio_test::block_on(users.create(CreateUser {
            name: String::new(),
            email,
            password: "pw".to_string(),
            role: Role::User,
        }));
        prop_assert!(matches!(result, Err(UserServiceError::Validation(_))));
    }
}

proptest! {
    // bcrypt keeps each case slow even at cost 4
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn test_only_the_right_password_authenticates(
        email in email_strategy(),
        password in "[ -~]{1,32}",
        wrong in "[ -~]{1,32}",
    ) {
        prop_assume!(password != wrong);

        let repo = Arc::new(InMemoryUserRepository::new());
        let users = UserService::new(repo.clone(), 4);
        let auth = AuthService::new(repo, TokenCodec::new("prop-secret"));

        tokio_test::block_on(async {
            users
                .create(CreateUser {
                    name: "Prop".to_string(),
                    email: email.clone(),
                    password: password.clone(),
                    role: Role::User,
                })
                .await
                .unwrap();

            let token = auth.authenticate(&email, &password).await.unwrap();
            let user = auth.validate_token(&token).await.unwrap();
            assert_eq!(user.email, email);

            let denied = auth.authenticate(&email, &wrong).await;
            assert!(matches!(denied, Err(AuthError::InvalidCredentials)));
        });
    }
}
