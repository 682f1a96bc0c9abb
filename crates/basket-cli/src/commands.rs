use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the app in a new tab and show the welcome screen
    Open {
        /// Navigate back to the welcome screen within the same tab
        #[arg(long)]
        revisit: bool,

        /// Feed a touch gesture: start and end vertical positions
        #[arg(long, num_args = 2, value_names = ["START_Y", "END_Y"], allow_negative_numbers = true)]
        swipe: Option<Vec<f64>>,
    },

    /// Log in with any username or phone and password
    Login {
        #[arg(long)]
        identifier: String,

        #[arg(long)]
        password: String,
    },

    /// Register this device's user and log in
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Enter the app without an account
    Demo,

    /// Show the stored user and session
    Status,
}
