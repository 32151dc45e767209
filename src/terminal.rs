//! Toy terminal command interpreter.
//!
//! Fully client-local: a fixed dictionary maps known commands to
//! canned multi-line responses. The rendering component owns the
//! history and timing; this module only decides what a line of input
//! means.

use uuid::Uuid;

/// Visual style of a rendered terminal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Error,
    Success,
}

/// One rendered line of terminal history. Ephemeral; `clear` discards
/// the whole list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub id: Uuid,
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
        }
    }
}

pub const WELCOME_LINE: &str = "Bem-vinda ao terminal! Digite \"help\" para começar.";

/// Per-line delay of the "typing" effect, in milliseconds.
pub const OUTPUT_STAGGER_MS: u32 = 50;

const COMMANDS: &[(&str, &[&str])] = &[
    (
        "help",
        &[
            "📋 Comandos disponíveis:",
            "  whoami      → quem sou eu",
            "  skills      → minhas habilidades",
            "  projects    → meus projetos",
            "  contact     → como me contatar",
            "  clear       → limpar terminal",
        ],
    ),
    (
        "whoami",
        &[
            "👩‍💻 Brenda G.",
            "   Estudante de Engenharia de Software",
            "   Especialidade: DevOps & Automação",
            "   Status: Buscando estágio 🚀",
        ],
    ),
    (
        "skills",
        &[
            "🛠️  Stack técnica:",
            "   Languages  → Python, TypeScript, Bash",
            "   DevOps     → Docker, GitHub Actions, Linux",
            "   Cloud      → Vercel, AWS (básico)",
            "   Databases  → PostgreSQL, Redis",
        ],
    ),
    (
        "projects",
        &[
            "📁 Projetos em destaque:",
            "   [1] Pipeline CI/CD com GitHub Actions",
            "   [2] Sistema de monitoramento com Python",
            "   [3] Automação de deploy com Docker",
            "   → acesse /projects para ver todos",
        ],
    ),
    (
        "contact",
        &[
            "📬 Contato:",
            "   GitHub   → github.com/seu-usuario",
            "   LinkedIn → linkedin.com/in/seu-usuario",
            "   Email    → seu@email.com",
        ],
    ),
];

/// Result of interpreting one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Empty input: no echo, no output.
    Noop,
    /// `clear`: wipe the whole history.
    Clear,
    /// Known command: echo plus staggered response lines.
    Respond {
        echo: String,
        lines: &'static [&'static str],
    },
    /// Unknown command: echo plus a single error line.
    Unknown { echo: String, message: String },
}

/// Interprets a raw input line. Input is trimmed and lowercased before
/// lookup; only non-empty input is echoed.
pub fn evaluate(raw: &str) -> Evaluation {
    let command = raw.trim().to_lowercase();

    if command.is_empty() {
        return Evaluation::Noop;
    }

    let echo = format!("$ {command}");

    if command == "clear" {
        return Evaluation::Clear;
    }

    match lookup(&command) {
        Some(lines) => Evaluation::Respond { echo, lines },
        None => Evaluation::Unknown {
            message: format!("comando não encontrado: \"{command}\". Digite \"help\"."),
            echo,
        },
    }
}

fn lookup(command: &str) -> Option<&'static [&'static str]> {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map(|(_, lines)| *lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_returns_the_fixed_line_list() {
        let Evaluation::Respond { echo, lines } = evaluate("help") else {
            panic!("help should be a known command");
        };
        assert_eq!(echo, "$ help");
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "📋 Comandos disponíveis:");
        assert!(lines.iter().any(|l| l.contains("clear")));
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(evaluate("  WhoAmI  "), evaluate("whoami"));
        let Evaluation::Respond { echo, .. } = evaluate("  WhoAmI  ") else {
            panic!("whoami should be a known command");
        };
        assert_eq!(echo, "$ whoami");
    }

    #[test]
    fn clear_wipes_history() {
        assert_eq!(evaluate("clear"), Evaluation::Clear);
        assert_eq!(evaluate("  CLEAR "), Evaluation::Clear);
    }

    #[test]
    fn empty_input_produces_no_line_at_all() {
        assert_eq!(evaluate(""), Evaluation::Noop);
        assert_eq!(evaluate("   "), Evaluation::Noop);
        assert_eq!(evaluate("\t"), Evaluation::Noop);
    }

    #[test]
    fn unknown_command_yields_one_error_line_naming_it() {
        let Evaluation::Unknown { echo, message } = evaluate("unknowngibberish") else {
            panic!("should be unknown");
        };
        assert_eq!(echo, "$ unknowngibberish");
        assert_eq!(
            message,
            "comando não encontrado: \"unknowngibberish\". Digite \"help\"."
        );
    }

    #[test]
    fn every_dictionary_entry_is_reachable() {
        for (name, lines) in COMMANDS {
            let Evaluation::Respond { lines: got, .. } = evaluate(name) else {
                panic!("{name} should resolve");
            };
            assert_eq!(&got, lines);
            assert!(!lines.is_empty());
        }
    }

    #[test]
    fn line_constructor_tags_kind_and_text() {
        let line = TerminalLine::new(LineKind::Error, "boom");
        assert_eq!(line.kind, LineKind::Error);
        assert_eq!(line.text, "boom");
    }
}
