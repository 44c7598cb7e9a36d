pub mod codec;
pub mod constants;
pub mod grid;
pub mod text;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::codec::Rgb;
pub use crate::grid::PixelGrid;
pub use crate::text::{export, load};

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_emoji"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
