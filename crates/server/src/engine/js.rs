/// Init script that buffers console calls in `window.__pwRecordConsole`.
///
/// Installed once per document; repeated evaluation is a no-op.
pub const CONSOLE_CAPTURE_JS: &str = r#"(() => {
	if (window.__pwRecordConsole) return;
	const buffer = [];
	window.__pwRecordConsole = buffer;
	const levels = { log: 'log', info: 'info', warn: 'warning', error: 'error', debug: 'debug' };
	const render = (value) => {
		if (typeof value === 'string') return value;
		try { return JSON.stringify(value); } catch (_) { return String(value); }
	};
	for (const [method, type] of Object.entries(levels)) {
		const original = console[method];
		console[method] = function (...args) {
			try {
				buffer.push({ type, text: args.map(render).join(' '), timestamp: Date.now() });
			} catch (_) {}
			return original.apply(this, args);
		};
	}
})();"#;

/// Empties the capture buffer and returns its contents as a JSON string.
pub const CONSOLE_DRAIN_JS: &str = "JSON.stringify((window.__pwRecordConsole || []).splice(0))";
