//! kintai main entrypoint.

use kintai::run;
use kintai::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
