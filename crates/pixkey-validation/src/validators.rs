//! # Key Validators — One Format Contract per Key Type
//!
//! The `KeyValidator` trait and its five implementations. Each validator
//! is independent and stateless; adding a key type means adding one
//! implementation and registering it — no existing validator changes.
//!
//! Pattern checks are hand-rolled byte scans with the equivalent regex
//! documented, so the rejection reasons can stay specific (which part of
//! the value failed, not just "no match").

use pixkey_core::KeyType;
use uuid::Uuid;

use crate::checksum::{cnpj_checksum_is_valid, cpf_checksum_is_valid};
use crate::error::InvalidKey;

/// Format contract for one key type.
///
/// Implementations are pure: `validate` reads the value and produces
/// either `Ok(())` or a typed rejection. The `Send + Sync` bounds allow
/// the registry to be shared across concurrent callers.
pub trait KeyValidator: Send + Sync {
    /// The key type this validator covers.
    fn key_type(&self) -> KeyType;

    /// Check `value` against this key type's format contract.
    fn validate(&self, value: &str) -> Result<(), InvalidKey>;
}

// ─── CPF ─────────────────────────────────────────────────────────────

/// Validates 11-digit natural-person tax identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpfValidator;

impl KeyValidator for CpfValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Cpf
    }

    fn validate(&self, value: &str) -> Result<(), InvalidKey> {
        if value.len() != 11 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidKey::new(
                KeyType::Cpf,
                value,
                "must be exactly 11 digits",
            ));
        }
        if !cpf_checksum_is_valid(value) {
            return Err(InvalidKey::new(
                KeyType::Cpf,
                value,
                "check digits do not match",
            ));
        }
        Ok(())
    }
}

// ─── CNPJ ────────────────────────────────────────────────────────────

/// Validates 14-digit legal-entity tax identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjValidator;

impl KeyValidator for CnpjValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Cnpj
    }

    fn validate(&self, value: &str) -> Result<(), InvalidKey> {
        if value.len() != 14 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidKey::new(
                KeyType::Cnpj,
                value,
                "must be exactly 14 digits",
            ));
        }
        if !cnpj_checksum_is_valid(value) {
            return Err(InvalidKey::new(
                KeyType::Cnpj,
                value,
                "check digits do not match",
            ));
        }
        Ok(())
    }
}

// ─── Phone ───────────────────────────────────────────────────────────

/// Validates mobile phone numbers in international form:
/// `+<country code><2-digit area code><9-digit subscriber number>`.
///
/// The area code is accepted by length alone; there is no area-code
/// allowlist at this layer.
#[derive(Debug, Clone)]
pub struct PhoneValidator {
    country_code: String,
}

impl PhoneValidator {
    /// Build a validator for the given two-digit country calling code.
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
        }
    }

    /// The country calling code this validator accepts.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl Default for PhoneValidator {
    /// The national default: Brazilian country code `55`.
    fn default() -> Self {
        Self::new("55")
    }
}

impl KeyValidator for PhoneValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Phone
    }

    fn validate(&self, value: &str) -> Result<(), InvalidKey> {
        let Some(digits) = value.strip_prefix('+') else {
            return Err(InvalidKey::new(
                KeyType::Phone,
                value,
                "must start with '+'",
            ));
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidKey::new(
                KeyType::Phone,
                value,
                "must contain only digits after '+'",
            ));
        }

        if digits.len() < 12 || digits.len() > 13 {
            return Err(InvalidKey::new(
                KeyType::Phone,
                value,
                "must have 12-13 digits after '+' (country code + area code + number)",
            ));
        }

        if &digits[..2] != self.country_code {
            return Err(InvalidKey::new(
                KeyType::Phone,
                value,
                format!("must use country code '{}'", self.country_code),
            ));
        }

        // Digits 3-4 are the area code, accepted by length alone.
        let subscriber = &digits[4..];
        if subscriber.len() != 9 {
            return Err(InvalidKey::new(
                KeyType::Phone,
                value,
                "subscriber number must have exactly 9 digits",
            ));
        }

        Ok(())
    }
}

// ─── Email ───────────────────────────────────────────────────────────

/// Validates email addresses against a conservative shape:
/// `^[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}$`, at most 77 characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator;

/// Maximum key-value length admitted by the national registry.
const MAX_EMAIL_LEN: usize = 77;

impl KeyValidator for EmailValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Email
    }

    fn validate(&self, value: &str) -> Result<(), InvalidKey> {
        if value.trim().is_empty() {
            return Err(InvalidKey::new(KeyType::Email, value, "must not be blank"));
        }
        if !value.contains('@') {
            return Err(InvalidKey::new(KeyType::Email, value, "must contain '@'"));
        }
        if value.chars().count() > MAX_EMAIL_LEN {
            return Err(InvalidKey::new(
                KeyType::Email,
                value,
                format!("must not exceed {MAX_EMAIL_LEN} characters"),
            ));
        }
        if !email_shape_is_valid(value) {
            return Err(InvalidKey::new(
                KeyType::Email,
                value,
                "must follow the local-part@domain.tld shape",
            ));
        }
        Ok(())
    }
}

/// Compiled check for `^[\w.-]+@[\w.-]+\.[a-zA-Z]{2,}$`.
///
/// `\w` is ASCII word characters. The last dot splits domain and
/// top-level suffix, mirroring the greedy regex semantics.
fn email_shape_is_valid(value: &str) -> bool {
    let bytes = value.as_bytes();
    let Some(at) = bytes.iter().position(|&b| b == b'@') else {
        return false;
    };

    let local = &bytes[..at];
    if local.is_empty() || !local.iter().all(|&b| is_name_byte(b)) {
        return false;
    }

    // A second '@' fails is_name_byte below, so one position() suffices.
    let rest = &bytes[at + 1..];
    let Some(dot) = rest.iter().rposition(|&b| b == b'.') else {
        return false;
    };

    let domain = &rest[..dot];
    if domain.is_empty() || !domain.iter().all(|&b| is_name_byte(b)) {
        return false;
    }

    let suffix = &rest[dot + 1..];
    suffix.len() >= 2 && suffix.iter().all(|b| b.is_ascii_alphabetic())
}

/// ASCII word character, dot, or hyphen — the `[\w.-]` class.
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b'-'
}

// ─── Random ──────────────────────────────────────────────────────────

/// Validates bank-generated random keys: exactly 36 characters in the
/// canonical hyphenated 8-4-4-4-12 UUID shape, case-insensitive hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomKeyValidator;

impl KeyValidator for RandomKeyValidator {
    fn key_type(&self) -> KeyType {
        KeyType::Random
    }

    fn validate(&self, value: &str) -> Result<(), InvalidKey> {
        // The length check excludes the alternate 32-char and braced
        // encodings the UUID parser would otherwise admit.
        if value.len() != 36 || Uuid::try_parse(value).is_err() {
            return Err(InvalidKey::new(
                KeyType::Random,
                value,
                "must be a canonical hyphenated UUID",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: Result<(), InvalidKey>) -> String {
        result.unwrap_err().reason
    }

    // ── CPF ──────────────────────────────────────────────────────────

    #[test]
    fn test_cpf_valid() {
        assert!(CpfValidator.validate("52998224725").is_ok());
    }

    #[test]
    fn test_cpf_checksum_mismatch_reason() {
        let r = reason(CpfValidator.validate("12345678901"));
        assert!(r.contains("check digits"), "unexpected reason: {r}");
    }

    #[test]
    fn test_cpf_shape_rejections() {
        assert!(CpfValidator.validate("529982247").is_err());
        assert!(CpfValidator.validate("529.982.247-25").is_err());
        assert!(CpfValidator.validate("").is_err());
    }

    #[test]
    fn test_cpf_error_carries_value_and_type() {
        let err = CpfValidator.validate("123").unwrap_err();
        assert_eq!(err.key_type, KeyType::Cpf);
        assert_eq!(err.value, "123");
    }

    // ── CNPJ ─────────────────────────────────────────────────────────

    #[test]
    fn test_cnpj_valid() {
        assert!(CnpjValidator.validate("11222333000181").is_ok());
    }

    #[test]
    fn test_cnpj_rejections() {
        assert!(CnpjValidator.validate("11222333000182").is_err());
        assert!(CnpjValidator.validate("11222333").is_err());
        assert!(CnpjValidator.validate("11.222.333/0001-81").is_err());
    }

    // ── Phone ────────────────────────────────────────────────────────

    #[test]
    fn test_phone_valid() {
        assert!(PhoneValidator::default().validate("+5511987654321").is_ok());
    }

    #[test]
    fn test_phone_missing_plus() {
        let r = reason(PhoneValidator::default().validate("5511987654321"));
        assert!(r.contains('+'), "unexpected reason: {r}");
    }

    #[test]
    fn test_phone_non_digit() {
        let r = reason(PhoneValidator::default().validate("+55a1987654321"));
        assert!(r.contains("only digits"), "unexpected reason: {r}");
    }

    #[test]
    fn test_phone_wrong_length() {
        assert!(PhoneValidator::default().validate("+55119876543").is_err());
        assert!(PhoneValidator::default().validate("+551198765432109").is_err());
    }

    #[test]
    fn test_phone_wrong_country_code() {
        let r = reason(PhoneValidator::default().validate("+4411987654321"));
        assert!(r.contains("country code"), "unexpected reason: {r}");
    }

    #[test]
    fn test_phone_short_subscriber_number() {
        // 12 digits pass the length window but leave an 8-digit
        // subscriber number.
        let r = reason(PhoneValidator::default().validate("+551198765432"));
        assert!(r.contains("9 digits"), "unexpected reason: {r}");
    }

    #[test]
    fn test_phone_custom_country_code() {
        let v = PhoneValidator::new("44");
        assert!(v.validate("+4411987654321").is_ok());
        assert!(v.validate("+5511987654321").is_err());
    }

    // ── Email ────────────────────────────────────────────────────────

    #[test]
    fn test_email_valid() {
        assert!(EmailValidator.validate("user@example.com").is_ok());
        assert!(EmailValidator.validate("first.last-x_1@sub.example.com.br").is_ok());
    }

    #[test]
    fn test_email_short_suffix_rejected() {
        assert!(EmailValidator.validate("a@b.c").is_err());
    }

    #[test]
    fn test_email_blank_and_missing_at() {
        let r = reason(EmailValidator.validate("   "));
        assert!(r.contains("blank"), "unexpected reason: {r}");
        let r = reason(EmailValidator.validate("user.example.com"));
        assert!(r.contains('@'), "unexpected reason: {r}");
    }

    #[test]
    fn test_email_double_at_rejected() {
        assert!(EmailValidator.validate("a@b@example.com").is_err());
    }

    #[test]
    fn test_email_embedded_space_rejected() {
        assert!(EmailValidator.validate("us er@example.com").is_err());
    }

    #[test]
    fn test_email_missing_suffix_rejected() {
        assert!(EmailValidator.validate("user@example").is_err());
        assert!(EmailValidator.validate("user@.com").is_err());
    }

    #[test]
    fn test_email_length_limit() {
        // 65 + 1 + 8 + 4 = 78 characters, one over the limit.
        let long = format!("{}@example.com", "a".repeat(65));
        assert_eq!(long.chars().count(), 78);
        let r = reason(EmailValidator.validate(&long));
        assert!(r.contains("77"), "unexpected reason: {r}");

        let at_limit = format!("{}@example.com", "a".repeat(64));
        assert!(EmailValidator.validate(&at_limit).is_ok());
    }

    // ── Random ───────────────────────────────────────────────────────

    #[test]
    fn test_random_valid_both_cases() {
        assert!(RandomKeyValidator
            .validate("123e4567-e89b-12d3-a456-426614174000")
            .is_ok());
        assert!(RandomKeyValidator
            .validate("123E4567-E89B-12D3-A456-426614174000")
            .is_ok());
    }

    #[test]
    fn test_random_rejects_unhyphenated() {
        assert!(RandomKeyValidator
            .validate("123e4567e89b12d3a456426614174000")
            .is_err());
    }

    #[test]
    fn test_random_rejects_wrong_shape() {
        assert!(RandomKeyValidator.validate("").is_err());
        assert!(RandomKeyValidator.validate("not-a-uuid").is_err());
        assert!(RandomKeyValidator
            .validate("123e4567-e89b-12d3-a456-42661417400g")
            .is_err());
        assert!(RandomKeyValidator
            .validate("{123e4567-e89b-12d3-a456-426614174000}")
            .is_err());
    }
}
