// SPDX-License-Identifier: MPL-2.0
use iced_resizable::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let flags = match Flags::from_args(pico_args::Arguments::from_env()) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
