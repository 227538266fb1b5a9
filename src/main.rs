fn main() {
    #[cfg(feature = "cli")]
    unicoderange::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("unicoderange: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
