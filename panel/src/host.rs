//! Drives a `TodoPanel` from line-oriented input.
//!
//! Each request the panel hands out is executed immediately on the
//! transport and completed before the panel is redrawn, so the host never
//! has more than one request in flight.

use std::io::{self, BufRead, Write};

use todo_panel_core::{view, PanelConfig, PendingRequest, TodoPanel};
use tracing::{info, warn};

use crate::commands::{Command, USAGE};
use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Host<T> {
    panel: TodoPanel,
    transport: T,
}

impl<T: Transport> Host<T> {
    pub fn new(config: &PanelConfig, transport: T) -> Self {
        Self {
            panel: TodoPanel::new(config),
            transport,
        }
    }

    pub fn panel(&self) -> &TodoPanel {
        &self.panel
    }

    /// Mount the panel and run its initial load.
    pub fn mount(&mut self) {
        if let Some(pending) = self.panel.mount() {
            self.dispatch(pending);
        }
    }

    /// Apply one command. Network round-trips finish before this returns.
    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Title(title) => self.panel.set_title(title),
            Command::Description(description) => self.panel.set_description(description),
            Command::Add => {
                if let Some(pending) = self.panel.submit() {
                    self.dispatch(pending);
                }
            }
            Command::Delete(token) => {
                let id = self.panel.resolve_id(&token);
                let pending = self.panel.delete(id);
                self.dispatch(pending);
            }
            Command::Reload => {
                let pending = self.panel.load_all();
                self.dispatch(pending);
            }
            Command::Show | Command::Help => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Mount, then read commands until `quit` or end of input, redrawing the
    /// panel after each one. The panel is unmounted on the way out.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        self.mount();
        write!(output, "{}", view::render(&self.panel))?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "{err}\n{USAGE}")?;
                    continue;
                }
            };
            if command == Command::Help {
                writeln!(output, "{USAGE}")?;
                continue;
            }
            if self.apply(command) == Flow::Quit {
                break;
            }
            write!(output, "{}", view::render(&self.panel))?;
            output.flush()?;
        }

        self.panel.unmount();
        info!("panel closed");
        Ok(())
    }

    fn dispatch(&mut self, pending: PendingRequest) {
        let PendingRequest { operation, request } = pending;
        let outcome = self.transport.execute(&request);
        if let Err(err) = &outcome {
            warn!(method = request.method.as_str(), url = %request.url, error = %err, "request failed");
        }
        self.panel.complete(operation, outcome);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use todo_panel_core::{ApiError, HttpMethod, HttpRequest, HttpResponse};

    use super::*;

    /// Replays canned outcomes and records every request it sees.
    #[derive(Default)]
    struct Scripted {
        outcomes: VecDeque<Result<HttpResponse, ApiError>>,
        seen: Vec<HttpRequest>,
    }

    impl Scripted {
        fn reply(mut self, status: u16, body: &str) -> Self {
            self.outcomes.push_back(Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            }));
            self
        }
    }

    impl Transport for Scripted {
        fn execute(&mut self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.push(request.clone());
            self.outcomes
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".into())))
        }
    }

    const EMPTY: &str = r#"{"data":{"todos":[]}}"#;

    #[test]
    fn mount_loads_once() {
        let mut host = Host::new(&PanelConfig::default(), Scripted::default().reply(200, EMPTY));
        host.mount();
        host.mount();
        assert_eq!(host.transport.seen.len(), 1);
        assert_eq!(host.transport.seen[0].method, HttpMethod::Get);
        assert!(!host.panel().is_loading());
    }

    #[test]
    fn invalid_add_never_touches_the_transport() {
        let mut host = Host::new(&PanelConfig::default(), Scripted::default().reply(200, EMPTY));
        host.mount();
        host.apply(Command::Title("X".into()));
        host.apply(Command::Add);
        assert_eq!(host.transport.seen.len(), 1);
        assert_eq!(host.panel().error(), Some("Title and description are required"));
    }

    #[test]
    fn add_then_delete() {
        let transport = Scripted::default()
            .reply(200, EMPTY)
            .reply(201, r#"{"data":{"todo":{"id":9,"title":"X","description":"Y"}}}"#)
            .reply(200, r#"{"status":"success"}"#);
        let mut host = Host::new(&PanelConfig::default(), transport);
        host.mount();
        host.apply(Command::Title("X".into()));
        host.apply(Command::Description("Y".into()));
        host.apply(Command::Add);
        assert_eq!(host.panel().todos().len(), 1);

        host.apply(Command::Delete("9".into()));
        assert!(host.panel().todos().is_empty());
        assert_eq!(host.transport.seen[2].url, "http://localhost:8000/api/todos/9");
    }

    #[test]
    fn delete_uses_the_id_as_drawn() {
        let transport = Scripted::default()
            .reply(
                200,
                r#"{"data":{"todos":[{"id":"007","title":"Spy","description":"x"},{"id":"9","title":"Nine","description":"y"}]}}"#,
            )
            .reply(200, r#"{"status":"success"}"#)
            .reply(200, r#"{"status":"success"}"#);
        let mut host = Host::new(&PanelConfig::default(), transport);
        host.mount();

        host.apply("delete 007".parse().unwrap());
        assert_eq!(host.transport.seen[1].url, "http://localhost:8000/api/todos/007");
        host.apply("delete 9".parse().unwrap());
        assert_eq!(host.transport.seen[2].url, "http://localhost:8000/api/todos/9");
        assert!(host.panel().todos().is_empty());
    }

    #[test]
    fn run_redraws_after_each_command_and_unmounts() {
        let transport = Scripted::default()
            .reply(200, r#"{"data":{"todos":[{"id":1,"title":"A","description":"B"}]}}"#);
        let mut host = Host::new(&PanelConfig::default(), transport);
        let input = "title Groceries\n\nbogus\nquit\nshow\n";
        let mut output = Vec::new();
        host.run(input.as_bytes(), &mut output).unwrap();

        let screen = String::from_utf8(output).unwrap();
        assert_eq!(screen.matches("## Add Todo").count(), 2);
        assert!(screen.contains("* A\n  B\n"));
        assert!(screen.contains("[Groceries]"));
        assert!(screen.contains("unknown command: bogus"));
        assert!(!host.panel().is_mounted());
    }

    #[test]
    fn transport_failure_on_load_is_shown_verbatim() {
        let mut host = Host::new(&PanelConfig::default(), Scripted::default());
        host.mount();
        assert_eq!(host.panel().error(), Some("no scripted reply"));
    }
}
