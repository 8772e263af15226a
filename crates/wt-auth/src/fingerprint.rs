use wt_core::User;

/// Short non-secret string that changes exactly when the user's credential
/// changes: the salt component of the stored credential hash.
pub fn credential_fingerprint(user: &User) -> String {
    salt_component(&user.password_hash)
}

/// Extract the salt from a `algorithm$iterations$salt$hash` string.
///
/// Strings with fewer than three components have no salt to speak of and
/// map to the empty fingerprint, which still satisfies the contract: any
/// later change to a well-formed hash produces a different fingerprint.
fn salt_component(password_hash: &str) -> String {
    let mut parts = password_hash.split('$');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(_), Some(salt)) => salt.to_string(),
        _ => String::new(),
    }
}
