use audiogate_engine::hw::PlatformHost;
use audiogate_engine::probe;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let target = args.next().unwrap_or_default();
    let desired_rate = args.next().unwrap_or_else(|| "48000".to_string());

    let readiness = probe::check(&PlatformHost, &target, &desired_rate);
    println!("{}", readiness.token());
    ExitCode::from(readiness.exit_code())
}
