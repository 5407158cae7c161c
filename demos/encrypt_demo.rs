use cascade_des::{CipherContext, decrypt, encrypt};

fn main() {
    env_logger::init();

    // --------------------------------------------------------
    // 0) Single key, single pass
    // --------------------------------------------------------
    println!("=== Single-key demo ===");
    let data = "HelloGo!";
    let key = "12345678";

    let ciphertext = encrypt(data, key, "", "");
    let plaintext = decrypt(&ciphertext, key, "", "").unwrap();
    println!(" Plaintext:  {data}");
    println!(" Ciphertext: {ciphertext}");
    println!(" Decrypted:  {plaintext}");
    assert_eq!(plaintext, data);

    // --------------------------------------------------------
    // 1) Portal-style credential cascade
    // --------------------------------------------------------
    println!("\n=== Credential cascade demo ===");
    let username = "2023212762";
    let password = "Ricxx0809.";
    let nonce = "LT-326991-vNraF3YTmA4L7uHkeN5bOjfQkunpwn-cas";
    let credential = format!("{username}{password}{nonce}");

    let context = CipherContext::new("1", "2", "3");
    let ciphertext = context.encrypt(&credential);
    println!(" Credential: {credential}");
    println!(" Ciphertext: {ciphertext}");
    assert_eq!(context.decrypt(&ciphertext).unwrap(), credential);
    println!(" Round trip OK ({} hex digits)", ciphertext.len());

    // --------------------------------------------------------
    // 2) Known information loss
    // --------------------------------------------------------
    println!("\n=== NUL loss demo ===");
    let lossy = "a\0b";
    let ciphertext = encrypt(lossy, "k", "", "");
    let recovered = decrypt(&ciphertext, "k", "", "").unwrap();
    println!(" {:?} -> {ciphertext} -> {:?}", lossy, recovered);
    assert_eq!(recovered, "ab");

    // --------------------------------------------------------
    // 3) Malformed ciphertext
    // --------------------------------------------------------
    println!("\n=== Format errors ===");
    println!(" decrypt(\"ABC\"):  {}", decrypt("ABC", "k", "", "").unwrap_err());
    println!(
        " decrypt(\"..ZZ\"): {}",
        decrypt("00000000000000ZZ", "k", "", "").unwrap_err()
    );
}
