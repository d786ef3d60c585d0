use audiogate_engine::config::{self, Config};
use audiogate_engine::homebridge::{Device, Homebridge};
use audiogate_engine::hw;
use std::io::{self, BufRead, Write};

/// Interactive first-run setup: pick the DAC, the desired rate, the
/// Homebridge endpoint and the plug accessory, then write the config file.
pub async fn run() -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Scanning for audio devices...");
    let devices = hw::list_devices();
    if devices.is_empty() {
        return Err("no audio devices found".to_string());
    }
    for (i, dev) in devices.iter().enumerate() {
        let rate = dev
            .nominal_sample_rate
            .map(|r| format!("{} Hz", r as i64))
            .unwrap_or_else(|| "unknown rate".to_string());
        println!("[{i}] {} ({} out, {rate})", dev.name, dev.output_channels);
    }
    let choice = prompt(&mut input, "Select your DAC device (enter number): ")?;
    let index: usize = choice
        .parse()
        .map_err(|_| format!("invalid choice: {choice}"))?;
    let dac = devices
        .get(index)
        .ok_or_else(|| format!("invalid choice: {index}"))?;

    let sample_rate = {
        let entered = prompt(&mut input, "Enter desired sample rate [48000]: ")?;
        if entered.is_empty() {
            "48000".to_string()
        } else {
            entered
        }
    };

    let base_url = prompt(
        &mut input,
        "Enter Homebridge base URL (e.g. http://homebridge.local:8581): ",
    )?;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err("invalid Homebridge base URL: must start with http:// or https://".to_string());
    }

    let username = prompt(&mut input, "Enter Homebridge UI username: ")?;
    let password = prompt(&mut input, "Enter Homebridge UI password: ")?;

    let hb = Homebridge::new(&base_url, &username, &password)?;
    let plugs = hb.list_devices().await?;
    let plug = select_plug(&mut input, &plugs)?;

    let cfg = Config {
        dac_name: dac.name.clone(),
        sample_rate,
        base_url,
        plug_device_id: plug.id.clone(),
        username,
        password,
    };
    cfg.save()?;
    println!("Configuration saved to {}", config::path().display());
    Ok(())
}

fn prompt(input: &mut impl BufRead, text: &str) -> Result<String, String> {
    print!("{text}");
    io::stdout().flush().map_err(|e| e.to_string())?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(|e| e.to_string())?;
    Ok(line.trim().to_string())
}

fn select_plug<'a>(input: &mut impl BufRead, plugs: &'a [Device]) -> Result<&'a Device, String> {
    if plugs.is_empty() {
        return Err("no plug accessories found on Homebridge".to_string());
    }
    println!("Available plug devices:");
    for (i, d) in plugs.iter().enumerate() {
        println!("[{i}] {} ({})", d.name, d.id);
    }
    let choice = prompt(input, "Select device to control (enter number): ")?;
    let index: usize = choice
        .parse()
        .map_err(|_| format!("invalid device selection: {choice}"))?;
    plugs
        .get(index)
        .ok_or_else(|| format!("invalid device selection: {index}"))
}
