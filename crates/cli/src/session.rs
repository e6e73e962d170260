//! Line-oriented adapter mapping picker events onto a [`PairingSession`].

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::{Result, bail};
use fontpair_core::{PairingError, PairingSession, Role, SlotKey};
use fontpair_font_catalog::CatalogLoader;
use log::debug;

const HELP: &str = "\
Commands:
  toggle <role>          show or hide a role in the preview
  font <role> <family>   assign a font family to an active role
  reset-font <role>      put a role back on the default font
  save                   save the current pairing into the next empty slot
  reset-slot <a|b>       clear a pairing slot
  suggest <query>        list catalog families containing the query
  show                   print the current state
  help                   print this message
  quit                   end the session
Roles: heading, subheading, body, caption";

/// One picker event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(Role),
    Font(Role, String),
    ResetFont(Role),
    Save,
    ResetSlot(SlotKey),
    Suggest(String),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match verb.to_ascii_lowercase().as_str() {
            "toggle" => Command::Toggle(rest.parse()?),
            "font" => {
                let (role, family) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Command::Font(role.parse()?, family.trim().to_string())
            }
            "reset-font" => Command::ResetFont(rest.parse()?),
            "save" => Command::Save,
            "reset-slot" => Command::ResetSlot(rest.parse()?),
            "suggest" => Command::Suggest(rest.to_string()),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("Unknown command '{other}' (try 'help')"),
        };
        Ok(command)
    }
}

/// Where session commands come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Typed by a user; suggestions are offered once the catalog arrives.
    Interactive,
    /// Read from a file; the catalog is loaded before the first command runs.
    Script,
}

/// Run commands from `input` until it ends or a `quit` is read.
///
/// Blank lines and lines starting with `#` are skipped. A command that is
/// rejected is reported on `out` and the session carries on.
pub fn run_session(
    input: impl BufRead,
    out: &mut impl Write,
    catalog: &mut CatalogLoader,
    mode: SessionMode,
) -> Result<PairingSession> {
    if mode == SessionMode::Script {
        catalog.wait();
    }
    let mut session = PairingSession::new();
    render(&session, out)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };
        debug!("Session command: {command:?}");

        if command == Command::Quit {
            break;
        }
        apply(&mut session, catalog, command, out)?;
    }

    Ok(session)
}

fn apply(
    session: &mut PairingSession,
    catalog: &mut CatalogLoader,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Toggle(role) => {
            let active = session.toggle_role(role);
            writeln!(out, "{role}: {}", if active { "on" } else { "off" })?;
            render_messages(session, out)?;
        }
        Command::Font(role, family) => match session.assign_font(role, &family) {
            Ok(reference) => writeln!(out, "reference: {reference}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        Command::ResetFont(role) => match session.reset_role_font(role) {
            Ok(reference) => writeln!(out, "reference: {reference}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        Command::Save => {
            if session.roles().all_inactive() {
                writeln!(out, "error: nothing to save, every role is off")?;
                return Ok(());
            }
            match session.save_pairing() {
                Ok(key) => writeln!(out, "saved pairing into slot {key}")?,
                Err(PairingError::SlotsFull) => {
                    writeln!(out, "both pairing slots are full, reset one to save again")?
                }
                Err(e) => writeln!(out, "error: {e}")?,
            }
        }
        Command::ResetSlot(key) => {
            if session.reset_slot(key) {
                writeln!(out, "slot {key} cleared")?;
            } else {
                writeln!(out, "slot {key} is already empty")?;
            }
        }
        Command::Suggest(query) => match catalog.poll() {
            None => writeln!(out, "font catalog is still loading")?,
            Some(catalog) => {
                let suggestions = catalog.suggest(&query);
                if suggestions.is_empty() {
                    writeln!(out, "no suggestions")?;
                }
                for family in suggestions {
                    writeln!(out, "  {family}")?;
                }
            }
        },
        Command::Show => render(session, out)?,
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => {}
    }
    Ok(())
}

/// Print roles, the combined reference and both slots.
pub fn render(session: &PairingSession, out: &mut impl Write) -> Result<()> {
    for (role, state) in session.roles().states().iter() {
        let marker = if state.active { "on" } else { "off" };
        writeln!(out, "{:<11} {:<3} {}", role.as_str(), marker, state.font_name)?;
    }
    writeln!(out, "reference   {}", session.font_reference())?;

    for key in SlotKey::ALL {
        match session.slots().snapshot(key) {
            None => writeln!(out, "slot {key}      empty")?,
            Some(snapshot) => {
                let fonts: Vec<&str> = snapshot
                    .iter()
                    .map(|(_, entry)| if entry.included { entry.font_name.as_str() } else { "-" })
                    .collect();
                writeln!(out, "slot {key}      {}", fonts.join(" / "))?;
            }
        }
    }
    render_messages(session, out)
}

fn render_messages(session: &PairingSession, out: &mut impl Write) -> Result<()> {
    let view = session.view();
    if view.show_no_preview {
        writeln!(out, "nothing to preview, every role is off")?;
    }
    if view.show_slots_full {
        writeln!(out, "both pairing slots are full")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{thread, time::Duration};

    use fontpair_font_catalog::{Catalog, CatalogProvider};

    use super::*;

    fn run(script: &str, catalog: Catalog) -> (PairingSession, String) {
        let mut out = Vec::new();
        let mut loader = CatalogLoader::ready(catalog);
        let session =
            run_session(script.as_bytes(), &mut out, &mut loader, SessionMode::Interactive)
                .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    struct SlowCatalog;

    impl CatalogProvider for SlowCatalog {
        fn fetch(&self) -> fontpair_font_catalog::Result<Vec<String>> {
            thread::sleep(Duration::from_millis(200));
            Ok(vec!["Roboto".to_string()])
        }
    }

    #[test]
    fn test_script_waits_for_catalog() {
        let mut out = Vec::new();
        let mut loader = CatalogLoader::spawn(SlowCatalog);
        run_session("suggest rob\n".as_bytes(), &mut out, &mut loader, SessionMode::Script)
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("  Roboto"));
        assert!(!out.contains("still loading"));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("toggle caption".parse::<Command>().unwrap(), Command::Toggle(Role::Caption));
        assert_eq!(
            "font heading  Playfair Display ".parse::<Command>().unwrap(),
            Command::Font(Role::Heading, "Playfair Display".to_string())
        );
        assert_eq!("reset-slot b".parse::<Command>().unwrap(), Command::ResetSlot(SlotKey::B));
        assert_eq!("SAVE".parse::<Command>().unwrap(), Command::Save);
        assert!("toggle title".parse::<Command>().is_err());
        assert!("paint heading".parse::<Command>().is_err());
        assert!("reset-slot".parse::<Command>().is_err());
    }

    #[test]
    fn test_session_script() {
        let script = "\
# pick a pairing
font heading Roboto
save
toggle caption
font caption Lato
save
save
reset-slot a
quit
font body Ignored
";
        let (session, out) = run(script, Catalog::default());

        assert!(out.contains("reference: Roboto|Inter|Inter|Inter"));
        assert!(out.contains("saved pairing into slot A"));
        assert!(out.contains("error: Role 'caption' is inactive"));
        assert!(out.contains("saved pairing into slot B"));
        assert!(out.contains("both pairing slots are full, reset one to save again"));
        assert!(out.contains("slot A cleared"));

        assert!(!session.slots().is_full(SlotKey::A));
        let b = session.slots().snapshot(SlotKey::B).unwrap();
        assert!(!b.get(Role::Caption).included);
        assert_eq!(session.roles().state(Role::Body).font_name, "Inter");
    }

    #[test]
    fn test_bad_lines_do_not_end_session() {
        let (session, out) = run("frobnicate\nfont heading   \nfont body Lora\n", Catalog::default());
        assert!(out.contains("error: Unknown command 'frobnicate'"));
        assert!(out.contains("error: Font name must be non-empty"));
        assert_eq!(session.roles().state(Role::Body).font_name, "Lora");
    }

    #[test]
    fn test_no_preview_message() {
        let script = "toggle heading\ntoggle subheading\ntoggle body\ntoggle caption\nsave\n";
        let (session, out) = run(script, Catalog::default());
        assert!(out.contains("nothing to preview, every role is off"));
        assert!(out.contains("error: nothing to save, every role is off"));
        assert!(!session.slots().is_full(SlotKey::A));
    }

    #[test]
    fn test_suggest() {
        let catalog = Catalog::new(vec!["Roboto".to_string(), "Lora".to_string()]);
        let (_, out) = run("suggest rob\nsuggest r\n", catalog);
        assert!(out.contains("  Roboto"));
        assert!(!out.contains("  Lora"));
        assert!(out.contains("no suggestions"));
    }

    #[test]
    fn test_render_slots() {
        let (_, out) = run("toggle body\nsave\nshow\n", Catalog::default());
        assert!(out.contains("slot A      Inter / Inter / - / Inter"));
        assert!(out.contains("slot B      empty"));
        assert!(out.contains("body        off Inter"));
    }
}
