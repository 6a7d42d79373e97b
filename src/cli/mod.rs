use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Ask the provider for the most popular places to visit at a destination
    Itinerary {
        destination: String,

        /// Length of the trip; four places are requested per day
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
        days: u32,

        /// Print the prompt instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Send a single free-form message to the provider
    Chat {
        message: String,
    },

    /// Show the resolved provider endpoint, model and whether an API key is set
    Check,

    /// Start the HTTP API (POST /api/chat, POST /api/itinerary, GET /api/health)
    Serve {
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
