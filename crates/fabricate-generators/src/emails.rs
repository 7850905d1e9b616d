//! Email address generators.

use crate::strings::{alphanumeric_strings, strings_from_fixed_list};
use fabricate_core::checks::check_not_empty;
use fabricate_core::settings::DEFAULT_EMAIL_DOMAINS;
use fabricate_core::{Generator, GeneratorError, Settings};
use rand::seq::SliceRandom;

/// Domains from [`DEFAULT_EMAIL_DOMAINS`].
pub fn popular_email_domains() -> Generator<String> {
    Generator::new(|| {
        DEFAULT_EMAIL_DOMAINS
            .choose(&mut rand::thread_rng())
            .map(|domain| domain.to_string())
            .unwrap_or_default()
    })
}

/// `{username}@{domain}` on popular domains.
pub fn emails() -> Generator<String> {
    build_emails(popular_email_domains())
}

/// `{username}@{domain}` with domains drawn from `domains`.
///
/// One probe value is drawn up front; an empty domain is rejected.
pub fn emails_with_domains(domains: Generator<String>) -> Result<Generator<String>, GeneratorError> {
    check_not_empty(&domains.get(), "Email Domain Generator returned empty String")?;
    Ok(build_emails(domains))
}

/// Emails on the domains configured in `settings`.
pub fn emails_from_settings(settings: &Settings) -> Result<Generator<String>, GeneratorError> {
    let domains = strings_from_fixed_list(settings.email_domains.iter().cloned())?;
    emails_with_domains(domains)
}

fn build_emails(domains: Generator<String>) -> Generator<String> {
    // alphanumeric usernames guarantee a single '@'
    let usernames = alphanumeric_strings();
    Generator::new(move || format!("{}@{}", usernames.get(), domains.get()))
}
