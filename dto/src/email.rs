//! Email address syntax check.
//!
//! Accepts `local@domain` where the domain is a dotted host name ending in a
//! top-level label. Quoted local parts, IP-literal domains, and display-name
//! forms (`John <john@example.com>`) are rejected.

#[cfg(test)]
#[path = "email_test.rs"]
mod tests;

const MAX_LOCAL_LEN: usize = 64;
const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;
const LOCAL_SPECIALS: &str = "!#$%&'*+-/=?^_`{|}~";

/// Return whether `candidate` is a syntactically valid email address.
#[must_use]
pub fn is_email(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.rsplit_once('@') else {
        return false;
    };
    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || LOCAL_SPECIALS.contains(c) || (!c.is_ascii() && !c.is_whitespace()))
}

fn is_domain(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, hosts)) = labels.split_last() else {
        return false;
    };
    if hosts.is_empty() {
        return false;
    }
    labels.iter().all(|label| is_label(label)) && is_tld(tld)
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || (!c.is_ascii() && c.is_alphanumeric()))
}

fn is_tld(tld: &str) -> bool {
    // Punycode TLDs (`xn--p1ai`) carry digits and hyphens.
    if let Some(rest) = tld.strip_prefix("xn--") {
        return rest.len() >= 2;
    }
    tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic)
}
