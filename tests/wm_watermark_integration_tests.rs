use std::process::Command;

fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_wm-watermark")
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(binary())
        .args(args)
        .output()
        .expect("wm-watermark could not be started")
}

#[test]
fn test_image_mark_command_is_printed() {
    let result = run(&[
        "-image",
        "logo.png",
        "-gravity",
        "SouthEast",
        "-opacity",
        "0.3",
        "photo.jpg",
        "out.jpg",
    ]);

    assert!(result.status.success());
    assert_eq!(
        String::from_utf8(result.stdout).unwrap().trim_end(),
        "composite -gravity SouthEast -geometry +0+0 -dissolve 30% 'logo.png' 'photo.jpg' 'out.jpg'"
    );
}

#[test]
fn test_tiled_text_is_piped_and_in_place() {
    let result = run(&[
        "-text", "© Me", "-tile", "-rotate", "15", "-opacity", "0.4", "photo.jpg",
    ]);

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    let (producer, consumer) = stdout.trim_end().split_once(" | ").unwrap();
    assert!(producer.starts_with("convert -size 100x100 xc:none -gravity Center -draw "));
    assert!(producer.ends_with(" miff:-"));
    assert_eq!(consumer, "composite -tile miff:- 'photo.jpg' 'photo.jpg'");
}

#[test]
fn test_hostile_text_stays_inside_draw_argument() {
    let text = "'; touch /tmp/pwned; echo '$(id)`id`";
    let result = run(&["-text", text, "in.png", "out.png"]);

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    let words = shlex::split(stdout.trim_end()).unwrap();
    assert_eq!(words.len(), 5);
    assert_eq!(words[0], "convert");
    assert_eq!(words[1], "in.png");
    assert_eq!(words[2], "-draw");
    assert_eq!(words[4], "out.png");
    assert!(words[3].contains(r"text 0,0 '\'; touch /tmp/pwned; echo \'$(id)`id`'"));
}

#[test]
fn test_unknown_anchor_fails() {
    let result = run(&["-text", "x", "-anchor", "middle", "in.png"]);

    assert!(!result.status.success());
    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8(result.stderr).unwrap().contains("`anchor'"));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_help_lists_options() {
    let result = run(&["-help"]);

    assert!(result.status.success());
    let stdout = String::from_utf8(result.stdout).unwrap();
    assert!(stdout.contains("-tile-size"));
    assert!(stdout.contains("Usage: wm-watermark"));
}
