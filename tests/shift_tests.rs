use cipherbreak::alphabet;
use cipherbreak::cipher::shift;
use cipherbreak::error::CipherBreakError;

mod common;

#[test]
fn test_encrypt_shifts_letters() {
    assert_eq!(
        shift::encrypt("the voyage of oblivion", 8).unwrap(),
        "BPMDWGIOMWNWJTQDQWV"
    );
}

#[test]
fn test_round_trip() {
    let ciphertext = shift::encrypt("MEET ME AT THE BRIDGE", 13).unwrap();
    assert_eq!(
        shift::decrypt(&ciphertext, 13).unwrap(),
        "MEETMEATTHEBRIDGE"
    );
}

#[test]
fn test_full_alphabet_shift_is_identity() {
    assert_eq!(shift::encrypt("WRAP", 26).unwrap(), "WRAP");
}

#[test]
fn test_zero_shift_rejected() {
    assert!(matches!(
        shift::encrypt("HELLO", 0),
        Err(CipherBreakError::InvalidKey(_))
    ));
    assert!(matches!(
        shift::decrypt("HELLO", 0),
        Err(CipherBreakError::InvalidKey(_))
    ));
}

#[test]
fn test_empty_text_rejected() {
    assert!(matches!(
        shift::encrypt("1999!", 5),
        Err(CipherBreakError::EmptyInput(_))
    ));
}

#[test]
fn test_crack_ranks_true_shift_first() {
    let model = common::trained_model(4);
    let ciphertext = shift::encrypt(common::PASSAGE, 8).unwrap();

    let guesses = shift::crack(&ciphertext, &model).unwrap();
    assert_eq!(guesses.len(), 26);

    assert_eq!(guesses[0].shift, 8);
    assert_eq!(guesses[0].plaintext, alphabet::normalize(common::PASSAGE));

    // Ranking is descending by score.
    for pair in guesses.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}
