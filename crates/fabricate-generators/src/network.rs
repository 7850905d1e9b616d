//! URL, port and IPv4 address generators.

use crate::emails::popular_email_domains;
use crate::numbers::int_range;
use crate::strings::alphanumeric_strings;
use fabricate_core::checks::check_not_empty;
use fabricate_core::{Generator, GeneratorError};
use rand::Rng;
use std::net::Ipv4Addr;

/// Schemes accepted by [`urls_with_protocol`].
pub const VALID_PROTOCOLS: &[&str] = &["http", "https", "ftp", "file", "ssh"];

/// `http://` URLs on popular domains.
pub fn http_urls() -> Generator<String> {
    urls_for("http")
}

/// `https://` URLs on popular domains.
pub fn https_urls() -> Generator<String> {
    urls_for("https")
}

/// URLs of the form `{protocol}://{host}.{domain}`.
///
/// A trailing `://` on `protocol` is ignored.
pub fn urls_with_protocol(protocol: &str) -> Result<Generator<String>, GeneratorError> {
    check_not_empty(protocol, "missing protocol")?;

    let clean = protocol.replace("://", "").to_ascii_lowercase();
    let known = VALID_PROTOCOLS
        .iter()
        .copied()
        .find(|p| *p == clean)
        .ok_or_else(|| {
            GeneratorError::invalid_argument(format!("Unknown protocol: {protocol}"))
        })?;

    Ok(urls_for(known))
}

fn urls_for(protocol: &'static str) -> Generator<String> {
    let hosts = alphanumeric_strings();
    let domains = popular_email_domains();

    Generator::new(move || format!("{}://{}.{}", protocol, hosts.get(), domains.get()))
}

/// Port numbers in `[22, 32767)`.
pub fn ports() -> Generator<u16> {
    int_range(22, i32::from(i16::MAX)).map(|port| port as u16)
}

/// IPv4 addresses with every octet in `[1, 254]`.
pub fn ip4_addresses() -> Generator<Ipv4Addr> {
    Generator::new(|| {
        let mut rng = rand::thread_rng();
        Ipv4Addr::new(
            rng.gen_range(1..=254),
            rng.gen_range(1..=254),
            rng.gen_range(1..=254),
            rng.gen_range(1..=254),
        )
    })
}
