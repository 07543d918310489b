/// Intercept messages using the `log` crate and print them to STDERR, keeping STDOUT free for
/// generated markup. `RUST_LOG` overrides the default level of `info`.
pub fn setup() {
    use env_logger::{Builder, Env};
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}
