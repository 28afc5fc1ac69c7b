use clap::{Parser, ValueEnum};
use vigenere_analysis::{decrypt, encrypt, Key};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key for the Vigenère cipher (letters only)
    #[arg(short, long, help = "Key for the cipher, letters only")]
    key: Key,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Vigenère cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with key: {}", cli.key);
            encrypt(&cli.key, &content)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with key: {}", cli.key);
            decrypt(&cli.key, &content)
        }
    };

    // Write result to output file
    std::fs::write(&cli.output, result)
        .expect("Failed to write output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}
