use std::{sync::Arc, time::Duration};

use tokio::{
	sync::{mpsc, oneshot, watch},
	task::{JoinHandle, JoinSet},
};

use crate::{
	Error, Key, KeyOutcome, Phase, Result, ResultItem, SearchTicket, SearchTransport, Widget,
	WidgetConfig,
};

enum Command {
	Input(String),
	Key(Key, oneshot::Sender<KeyOutcome>),
	Focus,
	ClickOutside,
	Unmount,
}

/// Owner of a mounted widget. Dropping it without [`WidgetHandle::unmount`] also stops the driver
/// once the command channel closes.
pub struct WidgetHandle {
	commands: mpsc::UnboundedSender<Command>,
	state: watch::Receiver<Widget>,
	task: JoinHandle<()>,
}
impl WidgetHandle {
	pub fn input(&self, raw: impl Into<String>) -> Result<()> {
		self.send(Command::Input(raw.into()))
	}

	pub async fn key(&self, key: Key) -> Result<KeyOutcome> {
		let (reply_tx, reply_rx) = oneshot::channel();

		self.send(Command::Key(key, reply_tx))?;

		reply_rx.await.map_err(|_| Error::Unmounted)
	}

	pub fn focus(&self) -> Result<()> {
		self.send(Command::Focus)
	}

	pub fn click_outside(&self) -> Result<()> {
		self.send(Command::ClickOutside)
	}

	/// Latest published widget state.
	pub fn snapshot(&self) -> Widget {
		self.state.borrow().clone()
	}

	pub fn subscribe(&self) -> watch::Receiver<Widget> {
		self.state.clone()
	}

	/// Stops the driver, cancelling any pending debounce timer and in-flight request.
	pub async fn unmount(self) {
		let _ = self.commands.send(Command::Unmount);

		if let Err(err) = self.task.await {
			tracing::warn!(error = %err, "Widget driver ended abnormally.");
		}
	}

	fn send(&self, command: Command) -> Result<()> {
		self.commands.send(command).map_err(|_| Error::Unmounted)
	}
}

/// Validates `config` and starts a driver task for one widget.
pub fn mount(config: WidgetConfig, transport: Arc<dyn SearchTransport>) -> Result<WidgetHandle> {
	config.validate()?;

	let (commands_tx, commands_rx) = mpsc::unbounded_channel();
	let (state_tx, state_rx) = watch::channel(Widget::new(&config));
	let driver = Driver {
		state: state_tx,
		transport,
		debounce: Duration::from_millis(config.debounce_ms),
		request_timeout_ms: config.request_timeout_ms,
		timer: None,
		generation: 0,
		requests: JoinSet::new(),
	};
	let task = tokio::spawn(driver.run(commands_rx));

	tracing::debug!(debounce_ms = config.debounce_ms, "Widget mounted.");

	Ok(WidgetHandle { commands: commands_tx, state: state_rx, task })
}

struct Driver {
	state: watch::Sender<Widget>,
	transport: Arc<dyn SearchTransport>,
	debounce: Duration,
	request_timeout_ms: u64,
	timer: Option<JoinHandle<()>>,
	/// Bumped on every input so a timer that fired just before being aborted is ignored.
	generation: u64,
	requests: JoinSet<(u64, Result<Vec<ResultItem>>)>,
}
impl Driver {
	async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
		let (fired_tx, mut fired_rx) = mpsc::unbounded_channel::<u64>();

		loop {
			tokio::select! {
				command = commands.recv() => match command {
					Some(Command::Unmount) | None => break,
					Some(command) => self.apply(command, &fired_tx),
				},
				Some(generation) = fired_rx.recv() => {
					if generation == self.generation {
						self.timer = None;

						self.start_search();
					}
				},
				Some(joined) = self.requests.join_next(), if !self.requests.is_empty() => {
					match joined {
						Ok((seq, result)) => {
							let returned = result.as_ref().map(Vec::len).ok();

							self.state.send_modify(|widget| {
								if widget.on_response(seq, result) {
									tracing::debug!(seq, ?returned, "Applied search response.");
								}
							});
						},
						Err(err) => tracing::warn!(error = %err, "Search task ended abnormally."),
					}
				},
			}
		}

		if let Some(timer) = self.timer.take() {
			timer.abort();
		}

		self.requests.abort_all();

		tracing::debug!("Widget unmounted.");
	}

	fn apply(&mut self, command: Command, fired_tx: &mpsc::UnboundedSender<u64>) {
		match command {
			Command::Input(raw) => {
				let mut debouncing = false;

				self.state.send_modify(|widget| {
					widget.on_input(&raw);

					debouncing = widget.phase() == Phase::Debouncing;
				});
				self.restart_timer(debouncing, fired_tx);
			},
			Command::Key(key, reply) => {
				let mut outcome = KeyOutcome::Ignored;

				self.state.send_modify(|widget| outcome = widget.on_key(key));

				let _ = reply.send(outcome);
			},
			Command::Focus => self.state.send_modify(Widget::on_focus),
			Command::ClickOutside => self.state.send_modify(Widget::on_click_outside),
			Command::Unmount => {},
		}
	}

	fn restart_timer(&mut self, schedule: bool, fired_tx: &mpsc::UnboundedSender<u64>) {
		self.generation += 1;

		if let Some(timer) = self.timer.take() {
			timer.abort();
		}
		if !schedule {
			return;
		}

		let generation = self.generation;
		let debounce = self.debounce;
		let fired_tx = fired_tx.clone();

		self.timer = Some(tokio::spawn(async move {
			tokio::time::sleep(debounce).await;

			let _ = fired_tx.send(generation);
		}));
	}

	fn start_search(&mut self) {
		let mut ticket = None;

		self.state.send_modify(|widget| ticket = widget.on_debounce_elapsed());

		let Some(SearchTicket { seq, term, limit }) = ticket else {
			return;
		};
		let transport = self.transport.clone();
		let timeout_ms = self.request_timeout_ms;

		tracing::debug!(seq, term_len = term.chars().count(), limit, "Sending search.");

		self.requests.spawn(async move {
			let timeout = Duration::from_millis(timeout_ms);
			let result = match tokio::time::timeout(timeout, transport.search(&term, limit)).await {
				Ok(result) => result,
				Err(_) => Err(Error::Timeout { timeout_ms }),
			};

			(seq, result)
		});
	}
}
