#![no_main]

use std::ffi::OsString;

use libfuzzer_sys::fuzz_target;
use watermagick::{args::parse_args, Watermark};
use watermagick_fuzz::shell_words;

fuzz_target!(|input: Vec<String>| {
    let arguments: Vec<OsString> = std::iter::once(String::from("wm-watermark"))
        .chain(input)
        .map(OsString::from)
        .collect();

    // the parser may reject anything it likes, but it must never panic,
    // and whatever it accepts must produce a well-quoted command or a clean error
    if let Ok(plan) = parse_args(arguments) {
        if let Ok(command) = Watermark::new(plan.source)
            .with_options(plan.options)
            .command(&plan.mark, &plan.output)
        {
            assert!(!shell_words(&command).is_empty());
        }
    }
});
