// Terminal command handlers
use crate::application::dashboard_state::SubmitError;
use crate::application::panel_session::PanelSession;
use crate::application::request_controller::SubmitOutcome;
use crate::domain::reading::{SensorField, UnknownField};
use crate::presentation::diagnostic_view::DiagnosticView;
use crate::presentation::terminal::{render_diagnostic, render_history, render_panel};
use tokio::task::JoinSet;

pub const HELP: &str = "\
Comandos:
  set <campo> <valor>   altera um parâmetro (horas_uso, temperatura_c, vibracao_mms, corrente_a, fator_potencia)
  submit                envia a leitura para análise
  show                  mostra o painel
  history               lista o histórico
  help                  esta ajuda
  quit                  sai
";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set { field: SensorField, raw: String },
    Submit,
    Show,
    History,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("usage: set <campo> <valor>")]
    MissingArgument,
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error("unknown command: {0}")]
    Unknown(String),
}

pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let Some(name) = parts.next() else {
        return Err(CommandError::Empty);
    };

    match name.to_ascii_lowercase().as_str() {
        "set" => {
            let field = parts
                .next()
                .ok_or(CommandError::MissingArgument)?
                .parse::<SensorField>()?;
            // the raw value is kept as typed; coercion happens in the form
            let raw = parts.collect::<Vec<_>>().join(" ");
            Ok(Command::Set { field, raw })
        }
        "submit" | "analisar" => Ok(Command::Submit),
        "show" => Ok(Command::Show),
        "history" | "historico" => Ok(Command::History),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "sair" => Ok(Command::Quit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

pub const SUBMIT_ACCEPTED: &str = "Enviando leitura para análise...";
pub const SUBMIT_BUSY: &str = "Processando IA... aguarde o resultado atual.";

/// Start a prediction in its own task so input keeps flowing while it runs.
/// The panel is already loading when this returns, so a second submit right
/// behind it is refused here rather than inside the task.
pub fn spawn_submit(session: &PanelSession, tasks: &mut JoinSet<()>) -> String {
    let pending = match session.begin_submit() {
        Ok(pending) => pending,
        Err(SubmitError::Busy) => return SUBMIT_BUSY.to_string(),
    };

    let session = session.clone();
    tasks.spawn(async move {
        match pending.run().await {
            SubmitOutcome::Succeeded {
                result,
                history_refresh,
            } => {
                print!("{}", render_diagnostic(Some(DiagnosticView::render(&result))));
                // wait for the refreshed history before showing the full panel
                let _ = history_refresh.await;
                print!("{}", render_panel(&session.snapshot()));
            }
            // the notice task tells the operator
            SubmitOutcome::Failed(e) => {
                tracing::debug!(error = %e, "Prediction finished without a result");
            }
        }
    });
    SUBMIT_ACCEPTED.to_string()
}

/// Wait for every prediction still running; dispatched work is never cut short.
pub async fn finish_in_flight(session: &PanelSession, tasks: &mut JoinSet<()>) {
    if session.is_loading() {
        tracing::info!("Waiting for the prediction in flight");
    }
    while let Some(joined) = tasks.join_next().await {
        if let Err(e) = joined {
            tracing::warn!("Prediction task ended abnormally: {}", e);
        }
    }
}

/// Handle one command; `None` means the session should end.
pub fn handle_command(
    session: &PanelSession,
    tasks: &mut JoinSet<()>,
    command: Command,
) -> Option<String> {
    // drop finished tasks so the set does not grow over a long session
    while tasks.try_join_next().is_some() {}

    let output = match command {
        Command::Set { field, raw } => {
            let value = session.edit(field, &raw);
            format!("{} = {}", field.label(), value)
        }
        Command::Submit => spawn_submit(session, tasks),
        Command::Show => render_panel(&session.snapshot()),
        Command::History => render_history(&session.history()),
        Command::Help => HELP.to_string(),
        Command::Quit => return None,
    };
    Some(output)
}
