use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the document API over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
