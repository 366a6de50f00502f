use cipherbreak::alphabet;
use cipherbreak::cipher::poly;
use cipherbreak::error::CipherBreakError;
use rstest::rstest;

// --- ENCRYPT / DECRYPT VECTORS ---

#[rstest]
#[case("HELLO", "KEY", "RIJVS")]
#[case("Hello, World!", "KEY", "RIJVSGSPVH")]
#[case("hello", "key", "RIJVS")]
#[case("h-e-l-l-o", "k e y", "RIJVS")]
fn test_encrypt_vectors(#[case] plaintext: &str, #[case] key: &str, #[case] expected: &str) {
    assert_eq!(poly::encrypt(plaintext, key).unwrap(), expected);
}

#[rstest]
#[case("RIJVS", "KEY", "HELLO")]
#[case("rijvs!", "key", "HELLO")]
fn test_decrypt_vectors(#[case] ciphertext: &str, #[case] key: &str, #[case] expected: &str) {
    assert_eq!(poly::decrypt(ciphertext, key).unwrap(), expected);
}

#[test]
fn test_round_trip() {
    let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
    let ciphertext = poly::encrypt(plaintext, "FORTIFY").unwrap();
    assert_eq!(poly::decrypt(&ciphertext, "FORTIFY").unwrap(), plaintext);
}

#[test]
fn test_key_wraps_around_text() {
    // Key longer than the text: only the first letters of the key are used.
    assert_eq!(
        poly::encrypt("AB", "KEYBOARD").unwrap(),
        poly::encrypt("AB", "KE").unwrap()
    );
}

#[test]
fn test_normalization_matches_pre_normalized_input() {
    let raw = "Attack at dawn -- bring the maps!";
    let normalized = alphabet::normalize(raw);
    assert_eq!(normalized, "ATTACKATDAWNBRINGTHEMAPS");
    assert_eq!(
        poly::encrypt(raw, "LEMON").unwrap(),
        poly::encrypt(&normalized, "LEMON").unwrap()
    );
}

// --- ERROR CASES ---

#[test]
fn test_empty_text_rejected() {
    assert!(matches!(
        poly::encrypt("", "KEY"),
        Err(CipherBreakError::EmptyInput(_))
    ));
    assert!(matches!(
        poly::encrypt("123 !?", "KEY"),
        Err(CipherBreakError::EmptyInput(_))
    ));
}

#[test]
fn test_key_without_letters_rejected() {
    assert!(matches!(
        poly::encrypt("HELLO", ""),
        Err(CipherBreakError::InvalidKey(_))
    ));
    assert!(matches!(
        poly::decrypt("HELLO", "42!"),
        Err(CipherBreakError::InvalidKey(_))
    ));
}
