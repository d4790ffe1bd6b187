//! Interactive Shell
//!
//! Drives a [`Session`] from line-based input and redraws the view after
//! every change. Ctrl+C during a request abandons it and returns to the
//! prompt; Ctrl+C at the prompt leaves the shell.

mod command;

pub use command::{parse, resolve_choice, Command, ShellError, HELP};

use crate::client::TimingsSource;
use crate::session::Session;
use crate::view::{self, components};
use std::future::Future;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Run the shell until `quit`, Ctrl+C at the prompt, or end of input
pub async fn run<R, W>(
    session: &mut Session,
    source: &dyn TimingsSource,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    run_with_interrupt(session, source, input, out, tokio::signal::ctrl_c).await
}

/// Like [`run`], with `interrupt` producing the future that signals Ctrl+C.
///
/// A fresh interrupt future is awaited at every prompt and during every
/// request, so the signal is always being listened for while the shell runs.
pub async fn run_with_interrupt<R, W, I, F>(
    session: &mut Session,
    source: &dyn TimingsSource,
    input: R,
    out: &mut W,
    mut interrupt: I,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    I: FnMut() -> F,
    F: Future<Output = std::io::Result<()>>,
{
    writeln!(out, "{}", view::render(session))?;
    writeln!(out, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let next = tokio::select! {
            line = lines.next_line() => Some(line),
            _ = interrupt() => None,
        };
        let line = match next {
            Some(line) => line?,
            None => {
                writeln!(out)?;
                tracing::debug!("Interrupted at prompt");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        let command = match parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        tracing::trace!(?command, "Shell command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Show => writeln!(out, "{}", view::render(session))?,
            Command::Countries => write!(out, "{}", components::country_selector(session))?,
            Command::Cities => {
                if session.selection().country().is_some() {
                    write!(out, "{}", components::city_selector(session))?;
                } else {
                    writeln!(out, "Select a country first")?;
                }
            }
            Command::Country(arg) => {
                let names: Vec<&str> = session
                    .available_countries()
                    .iter()
                    .map(|c| c.name)
                    .collect();
                match session.select_country(resolve_choice(&arg, &names)) {
                    Ok(_) => writeln!(out, "{}", view::render(session))?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            Command::City(arg) => {
                let cities = session.available_cities();
                match session.select_city(resolve_choice(&arg, cities)) {
                    Ok(_) => writeln!(out, "{}", view::render(session))?,
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            Command::Submit => submit(session, source, out, interrupt()).await?,
        }
    }

    Ok(())
}

async fn submit<W, F>(
    session: &mut Session,
    source: &dyn TimingsSource,
    out: &mut W,
    interrupt: F,
) -> std::io::Result<()>
where
    W: Write,
    F: Future<Output = std::io::Result<()>>,
{
    let Some(ticket) = session.begin_fetch() else {
        write!(out, "{}", components::submit_control(session))?;
        return Ok(());
    };

    write!(out, "{}", components::submit_control(session))?;
    out.flush()?;

    tokio::select! {
        result = source.fetch_timings(ticket.city(), ticket.country()) => {
            session.complete(ticket, result);
        }
        _ = interrupt => {
            session.abandon(ticket);
            writeln!(out, "Request cancelled")?;
        }
    }

    writeln!(out, "{}", view::render(session))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Prayer;
    use crate::client::{DailyTimings, FetchError, PrayerTime};
    use crate::session::FetchState;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Records requests and answers with Fajr only
    #[derive(Default)]
    struct RecordingSource {
        requests: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl TimingsSource for RecordingSource {
        async fn fetch_timings(
            &self,
            city: &str,
            country: &str,
        ) -> Result<DailyTimings, FetchError> {
            self.requests
                .lock()
                .unwrap()
                .push((city.to_string(), country.to_string()));
            Ok(DailyTimings::new(
                city,
                country,
                vec![PrayerTime {
                    prayer: Prayer::Fajr,
                    time: "04:30 (EET)".into(),
                }],
            ))
        }
    }

    async fn run_script(script: &str, source: &RecordingSource) -> (Session, String) {
        let mut session = Session::new();
        let mut out = Vec::new();
        let input = tokio::io::BufReader::new(script.as_bytes());
        run(&mut session, source, input, &mut out).await.unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_full_flow_by_number() {
        let source = RecordingSource::default();
        let (session, out) = run_script("country 2\ncity 1\nsubmit\nquit\n", &source).await;

        assert_eq!(
            *source.requests.lock().unwrap(),
            vec![("Cairo".to_string(), "Egypt".to_string())]
        );
        assert!(session.fetch_state().timings().is_some());
        assert!(out.contains("[ Loading Prayer Times... ] (disabled)"));
        assert!(out.contains("مواقيت الصلاة - Cairo, Egypt"));
        assert!(out.contains("4:30 AM"));
    }

    #[tokio::test]
    async fn test_submit_without_city_does_not_fetch() {
        let source = RecordingSource::default();
        let (session, out) = run_script("country morocco\nsubmit\n", &source).await;

        assert!(source.requests.lock().unwrap().is_empty());
        assert!(out.contains("[ Select Country & City ] (disabled)"));
        assert_eq!(session.selection().country().unwrap().name, "Morocco");
    }

    #[tokio::test]
    async fn test_errors_are_reported() {
        let source = RecordingSource::default();
        let (_, out) = run_script("city Cairo\ncountry Narnia\ncities\nfly\n", &source).await;

        assert!(out.contains("Select a country first"));
        assert!(out.contains("Unknown country: Narnia"));
        assert!(out.contains("Unknown command: fly"));
    }

    #[tokio::test]
    async fn test_listing_commands() {
        let source = RecordingSource::default();
        let (_, out) = run_script("countries\ncountry Lebanon\ncities\nhelp\n", &source).await;

        assert!(out.contains("19. United States (us)"));
        assert!(out.contains("8. Zahle"));
        assert!(out.contains("country <name|number>"));
    }

    /// Never answers
    #[derive(Default)]
    struct StalledSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TimingsSource for StalledSource {
        async fn fetch_timings(
            &self,
            _city: &str,
            _country: &str,
        ) -> Result<DailyTimings, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_interrupt_during_fetch_abandons_request() {
        let source = StalledSource::default();
        let mut session = Session::new();
        let mut out = Vec::new();
        let input = tokio::io::BufReader::new("country 2\ncity 1\nsubmit\nshow\nquit\n".as_bytes());

        run_with_interrupt(&mut session, &source, input, &mut out, || async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            Ok(())
        })
        .await
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(out.contains("Request cancelled"));
        assert!(matches!(session.fetch_state(), FetchState::Idle));
        assert!(session.can_submit());
        assert!(out.ends_with("[ Get Prayer Times for Cairo ]\n\n> "));
    }

    #[tokio::test]
    async fn test_interrupt_at_prompt_leaves_shell() {
        let source = RecordingSource::default();
        let mut session = Session::new();
        let mut out = Vec::new();
        // Writer stays open, so the prompt would otherwise wait forever
        let (_writer, reader) = tokio::io::duplex(64);

        run_with_interrupt(
            &mut session,
            &source,
            tokio::io::BufReader::new(reader),
            &mut out,
            || async { Ok(()) },
        )
        .await
        .unwrap();

        assert!(source.requests.lock().unwrap().is_empty());
        assert!(session.selection().country().is_none());
    }
}
