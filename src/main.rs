use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Context;
use parking_registration::configuration::get_configuration;
use parking_registration::telemetry::{get_subscriber, init_subscriber};
use parking_registration::{RegistrationFlow, RegistrationForm, Session};
use secrecy::Secret;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    if let Err(e) = try_main().await {
        eprintln!("Registration error: {e:?}");
        std::process::exit(1);
    }
}

async fn try_main() -> Result<(), anyhow::Error> {
    // stdout carries the prompts, logs go to stderr
    let subscriber = get_subscriber(
        "parking-registration".into(),
        "info".into(),
        io::stderr,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration")?;
    let client = configuration.registration_service.client()?;
    let flow = RegistrationFlow::new(
        Arc::new(client),
        configuration.registration.validator(),
        Arc::new(Session::default()),
        configuration.registration.submit_timeout(),
    );

    let mut form = read_form(&mut io::stdin().lock(), &mut io::stdout())?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match flow.submit_form(&mut form, &cancel).await {
        Some(notice) => println!("{notice}"),
        None => println!("Registration cancelled"),
    }
    Ok(())
}

fn read_form(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<RegistrationForm, anyhow::Error> {
    Ok(RegistrationForm {
        email: prompt(input, output, "Email")?,
        password: Secret::new(prompt(input, output, "Password")?),
        password_confirmation: Secret::new(prompt(input, output, "Confirm password")?),
        first_name: prompt(input, output, "First name")?,
        last_name: prompt(input, output, "Last name")?,
    })
}

fn prompt(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> Result<String, anyhow::Error> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read the {label} field"))?;
    // only the line terminator; the validator decides what whitespace means
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
