//! Process configuration, built once from the environment and passed by reference.

use crate::client::{Auth, VerifyClientBuilder};
use crate::domain::{
    AccountSid, AuthToken, PhoneNumber, RegionAliases, Routing, ServiceSid, ValidationError,
};

pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
pub const AUTH_TOKEN_VAR: &str = "TWILIO_AUTH_TOKEN";
pub const SERVICE_SID_VAR: &str = "TWILIO_VERIFY_SERVICE_SID";
pub const PHONE_NUMBER_VAR: &str = "PHONE_NUMBER";
pub const REGION_VAR: &str = "TWILIO_REGION";

/// Variables that must be set to a non-blank value.
pub const REQUIRED_VARS: [&str; 4] = [
    ACCOUNT_SID_VAR,
    AUTH_TOKEN_VAR,
    SERVICE_SID_VAR,
    PHONE_NUMBER_VAR,
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// One or more required variables are unset or blank.
    #[error("missing required environment variables: {}", .vars.join(", "))]
    Missing { vars: Vec<&'static str> },

    /// A variable is set but its value was rejected.
    #[error("invalid value for {var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Clone)]
/// Everything one invocation needs: credentials, service, destination, optional region.
pub struct Config {
    pub account_sid: AccountSid,
    pub auth_token: AuthToken,
    pub service_sid: ServiceSid,
    pub phone_number: PhoneNumber,
    /// Region alias as given; `None` when unset or blank.
    pub region: Option<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Blank values count as unset. All missing variables are reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let missing = REQUIRED_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ConfigError::Missing { vars: missing });
        }

        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing { vars: vec![key] });

        Ok(Self {
            account_sid: AccountSid::new(required(ACCOUNT_SID_VAR)?)
                .map_err(invalid(ACCOUNT_SID_VAR))?,
            auth_token: AuthToken::new(required(AUTH_TOKEN_VAR)?)
                .map_err(invalid(AUTH_TOKEN_VAR))?,
            service_sid: ServiceSid::new(required(SERVICE_SID_VAR)?)
                .map_err(invalid(SERVICE_SID_VAR))?,
            phone_number: PhoneNumber::parse(required(PHONE_NUMBER_VAR)?)
                .map_err(invalid(PHONE_NUMBER_VAR))?,
            region: get(REGION_VAR).map(|region| region.trim().to_owned()),
        })
    }

    /// Account credentials for basic auth.
    pub fn auth(&self) -> Auth {
        Auth::Account {
            account_sid: self.account_sid.clone(),
            auth_token: self.auth_token.clone(),
        }
    }

    /// Routing for the configured region alias, if it names a known alias.
    pub fn routing<'a>(&self, aliases: &'a RegionAliases) -> Option<&'a Routing> {
        aliases.resolve(self.region.as_deref())
    }

    /// Client builder with credentials and, for a known region alias, routing applied.
    pub fn client_builder(&self, aliases: &RegionAliases) -> VerifyClientBuilder {
        let builder = VerifyClientBuilder::new(self.auth());
        match self.routing(aliases) {
            Some(routing) => builder.routing(routing.clone()),
            None => builder,
        }
    }
}

fn invalid(var: &'static str) -> impl Fn(ValidationError) -> ConfigError {
    move |source| ConfigError::Invalid { var, source }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (ACCOUNT_SID_VAR, "AC0123456789abcdef".to_owned()),
            (AUTH_TOKEN_VAR, "token".to_owned()),
            (SERVICE_SID_VAR, "VA0123456789abcdef".to_owned()),
            (PHONE_NUMBER_VAR, "+14155550100".to_owned()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn loads_complete_configuration() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.account_sid.as_str(), "AC0123456789abcdef");
        assert_eq!(config.service_sid.as_str(), "VA0123456789abcdef");
        assert_eq!(config.phone_number.e164(), "+14155550100");
        assert_eq!(config.region, None);
    }

    #[test]
    fn omitting_any_required_variable_is_a_configuration_error() {
        for omitted in REQUIRED_VARS {
            let mut env = full_env();
            env.remove(omitted);

            match load(&env) {
                Err(ConfigError::Missing { vars }) => assert_eq!(vars, vec![omitted]),
                other => panic!("omitting {omitted}: unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn blank_values_count_as_missing() {
        for blank in REQUIRED_VARS {
            let mut env = full_env();
            env.insert(blank, "   ".to_owned());

            assert!(
                matches!(load(&env), Err(ConfigError::Missing { ref vars }) if vars == &vec![blank]),
                "blank {blank} was accepted"
            );
        }
    }

    #[test]
    fn all_missing_variables_are_reported_together() {
        let err = load(&HashMap::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required environment variables: TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN, \
             TWILIO_VERIFY_SERVICE_SID, PHONE_NUMBER"
        );
    }

    #[test]
    fn invalid_phone_number_names_the_variable() {
        let mut env = full_env();
        env.insert(PHONE_NUMBER_VAR, "4155550100".to_owned());

        let err = load(&env).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: PHONE_NUMBER_VAR,
                source: ValidationError::MissingCountryCode { .. }
            }
        ));
    }

    #[test]
    fn region_is_optional_and_blank_means_unset() {
        let mut env = full_env();
        env.insert(REGION_VAR, "  ".to_owned());
        assert_eq!(load(&env).unwrap().region, None);

        env.insert(REGION_VAR, " dublin ".to_owned());
        assert_eq!(load(&env).unwrap().region.as_deref(), Some("dublin"));
    }

    #[test]
    fn routing_applies_only_for_known_aliases() {
        let aliases = RegionAliases::default();
        let mut env = full_env();

        env.insert(REGION_VAR, "ireland".to_owned());
        let config = load(&env).unwrap();
        assert_eq!(config.routing(&aliases), Some(&Routing::ireland()));
        let client = config.client_builder(&aliases).build().unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://verify.dublin.ie1.twilio.com/v2/"
        );

        env.insert(REGION_VAR, "us1".to_owned());
        let config = load(&env).unwrap();
        assert_eq!(config.routing(&aliases), None);
        let client = config.client_builder(&aliases).build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://verify.twilio.com/v2/");
    }

    #[test]
    fn auth_uses_account_credentials() {
        let config = load(&full_env()).unwrap();
        match config.auth() {
            Auth::Account {
                account_sid,
                auth_token,
            } => {
                assert_eq!(account_sid.as_str(), "AC0123456789abcdef");
                assert_eq!(auth_token.expose(), "token");
            }
            other => panic!("unexpected auth: {other:?}"),
        }
    }
}
