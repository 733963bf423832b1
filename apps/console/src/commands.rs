//! Line-oriented commands typed into the console.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use client_core::UiEvent;
use shared::domain::UploadCandidate;
use thiserror::Error;

pub const HELP: &str = "\
commands:
  scan <url>                            submit a listing URL
  to-login | to-register                switch auth panel
  login <email> <password>
  register <email> <phone> <password> <confirm>
  password <text>                       live strength check
  confirm <password> <confirm>          live match check
  file [path]                           choose a file from disk (no path cancels)
  pick <name> <mime> <bytes>            choose a described file
  upload                                start the simulated upload
  again                                 process another URL
  feedback                              view feedback
  logout
  state | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    /// Needs a filesystem lookup before it becomes a [`UiEvent::FileChosen`].
    ChooseFile(PathBuf),
    State,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = rest.split_whitespace().collect();

    let event = match head {
        "" => return Err(CommandError::Empty),
        "quit" | "exit" => return Ok(Command::Quit),
        "help" => return Ok(Command::Help),
        "state" => return Ok(Command::State),
        // The URL is passed through untouched so validation sees what was typed.
        "scan" => UiEvent::ScanRequested {
            url: rest.to_string(),
        },
        "to-login" => UiEvent::ShowLoginPanel,
        "to-register" => UiEvent::ShowRegisterPanel,
        "login" => match args.as_slice() {
            [email, password] => UiEvent::LoginSubmitted {
                email: email.to_string(),
                password: password.to_string(),
            },
            [email] => UiEvent::LoginSubmitted {
                email: email.to_string(),
                password: String::new(),
            },
            [] => UiEvent::LoginSubmitted {
                email: String::new(),
                password: String::new(),
            },
            _ => return Err(CommandError::Usage("login <email> <password>")),
        },
        "register" => match args.as_slice() {
            [email, phone, password, confirm] => UiEvent::RegisterSubmitted {
                email: email.to_string(),
                phone: phone.to_string(),
                password: password.to_string(),
                confirm: confirm.to_string(),
            },
            _ => {
                return Err(CommandError::Usage(
                    "register <email> <phone> <password> <confirm>",
                ))
            }
        },
        "password" => UiEvent::RegisterPasswordEdited {
            password: rest.to_string(),
        },
        "confirm" => match args.as_slice() {
            [password, confirm] => UiEvent::RegisterConfirmEdited {
                password: password.to_string(),
                confirm: confirm.to_string(),
            },
            [password] => UiEvent::RegisterConfirmEdited {
                password: password.to_string(),
                confirm: String::new(),
            },
            _ => return Err(CommandError::Usage("confirm <password> <confirm>")),
        },
        "file" if rest.is_empty() => UiEvent::FileChosen(None),
        "file" => return Ok(Command::ChooseFile(PathBuf::from(rest))),
        "pick" => match args.as_slice() {
            [name, mime, bytes] => {
                let size_bytes = bytes
                    .parse::<u64>()
                    .map_err(|_| CommandError::Usage("pick <name> <mime> <bytes>"))?;
                UiEvent::FileChosen(Some(UploadCandidate::new(*name, *mime, size_bytes)))
            }
            _ => return Err(CommandError::Usage("pick <name> <mime> <bytes>")),
        },
        "upload" => UiEvent::UploadConfirmed,
        "again" => UiEvent::ProcessAnotherRequested,
        "feedback" => UiEvent::ViewFeedbackRequested,
        "logout" => UiEvent::LogoutRequested,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Command::Event(event))
}

/// Describes a file on disk the way a browser file picker would: name,
/// MIME type guessed from the extension, and size.
pub async fn describe_file(path: &Path) -> Result<UploadCandidate> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    if !metadata.is_file() {
        anyhow::bail!("{} is not a file", path.display());
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(UploadCandidate::new(
        file_name,
        mime.essence_str(),
        metadata.len(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(line: &str) -> UiEvent {
        match parse_command(line) {
            Ok(Command::Event(event)) => event,
            other => panic!("expected event for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn scan_keeps_the_raw_url() {
        assert_eq!(
            event("scan   https://www.copart.com/lot/1 "),
            UiEvent::ScanRequested {
                url: "https://www.copart.com/lot/1".into()
            }
        );
        assert_eq!(event("scan"), UiEvent::ScanRequested { url: String::new() });
    }

    #[test]
    fn login_tolerates_missing_fields() {
        assert_eq!(
            event("login a@b.co"),
            UiEvent::LoginSubmitted {
                email: "a@b.co".into(),
                password: String::new()
            }
        );
        assert_eq!(
            parse_command("login a b c"),
            Err(CommandError::Usage("login <email> <password>"))
        );
    }

    #[test]
    fn register_needs_all_four_fields() {
        assert_eq!(
            event("register a@b.co 0821234567 Passw0rd Passw0rd"),
            UiEvent::RegisterSubmitted {
                email: "a@b.co".into(),
                phone: "0821234567".into(),
                password: "Passw0rd".into(),
                confirm: "Passw0rd".into(),
            }
        );
        assert!(matches!(
            parse_command("register a@b.co"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn pick_builds_a_candidate() {
        assert_eq!(
            event("pick lots.pdf application/pdf 1024"),
            UiEvent::FileChosen(Some(UploadCandidate::new(
                "lots.pdf",
                "application/pdf",
                1024
            )))
        );
        assert!(matches!(
            parse_command("pick lots.pdf application/pdf lots"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn bare_file_cancels_the_picker() {
        assert_eq!(event("file"), UiEvent::FileChosen(None));
        assert_eq!(
            parse_command("file docs/lots.pdf"),
            Ok(Command::ChooseFile(PathBuf::from("docs/lots.pdf")))
        );
    }

    #[test]
    fn control_words_and_unknowns() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(parse_command("state"), Ok(Command::State));
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".into()))
        );
        assert_eq!(event("again"), UiEvent::ProcessAnotherRequested);
    }

    #[tokio::test]
    async fn describe_file_guesses_pdf_mime() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalogue.pdf");
        tokio::fs::write(&path, b"%PDF-1.4 test")
            .await
            .expect("write pdf");

        let candidate = describe_file(&path).await.expect("describe");
        assert_eq!(candidate.file_name, "catalogue.pdf");
        assert!(candidate.is_pdf());
        assert_eq!(candidate.size_bytes, 13);
    }

    #[tokio::test]
    async fn describe_file_reports_missing_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = describe_file(&dir.path().join("nope.pdf"))
            .await
            .expect_err("missing file");
        assert!(err.to_string().contains("cannot read"));
    }
}
