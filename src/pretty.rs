use crate::ui::splash::LOGO_NAME;

macro_rules! print_cmd_error {
    ($tt:tt) => {
        println!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
        println!("\x1b[1;31m[ERROR!!!]\x1b[0m Raw error being sent to stderr...\n");
    };
    ($tt:tt, $($tts:tt)+) => {
        println!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
        println!("\x1b[1;31m[ERROR!!!]\x1b[0m Raw error being sent to stderr...");
        println!("\x1b[1;31m[ERROR!!!]\x1b[0m Start details...");
        println!("{}", core::format_args!($($tts)*));
        println!("\x1b[1;31m[ERROR!!!]\x1b[0m End details.\n");
    }
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        println!("\x1b[1;33m[INFO!!!] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

pub(crate) fn print_friendly_error_header() {
    // RGB: E5 = 229, 4B = 75, 4B = 75
    println!("\x1b[38;2;229;75;75m{}\x1b[0m", LOGO_NAME);
    println!("\x1b[38;2;229;75;75mThe dataset could not be loaded.\x1b[0m");
    println!(
        "The UCI archive endpoint did not return a usable copy of the heart failure clinical records dataset. Check your network connection, or point CARDIOSCOPE_DATASET_URL at a mirror, and try again.\n"
    );
}

pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
