//! Base stylesheet shared by both sites.
//!
//! Each site appends its own layout rules:
//!
//! ```rust
//! use folio_ui::styles::BASE_CSS;
//!
//! let site = ".sidebar { width: 16rem; }";
//! let combined = format!("{BASE_CSS}\n{site}");
//! assert!(combined.contains(".toast-stack"));
//! ```

/// Theme variables, typography, cards, chips, buttons, form controls,
/// canvases, toasts and the typewriter caret.
pub const BASE_CSS: &str = r#"
:root {
    --bg: #0b0d17;
    --bg-elevated: #131728;
    --surface: rgba(255, 255, 255, 0.04);
    --border: rgba(255, 255, 255, 0.08);
    --text: #e6e8f2;
    --text-muted: #9aa0b8;
    --primary: #3B82F6;
    --secondary: #8B5CF6;
    --accent: #06B6D4;
    --success: #10B981;
    --danger: #EF4444;
    --radius: 14px;
    --font: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
    --mono: "JetBrains Mono", ui-monospace, monospace;
}

* { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
}

a { color: inherit; }

.gradient-text {
    background: linear-gradient(120deg, var(--primary), var(--secondary) 50%, var(--accent));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.muted { color: var(--text-muted); }

.section-title {
    font-size: clamp(2rem, 5vw, 3.5rem);
    font-weight: 800;
    margin: 0 0 1rem;
    text-align: center;
}

.section-subtitle {
    color: var(--text-muted);
    max-width: 42rem;
    margin: 0 auto 3rem;
    text-align: center;
}

.card {
    background: var(--surface);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 1.5rem;
    backdrop-filter: blur(12px);
    transition: transform 0.3s ease, border-color 0.3s ease, box-shadow 0.3s ease;
}

.card:hover {
    transform: translateY(-4px);
    border-color: rgba(139, 92, 246, 0.4);
    box-shadow: 0 20px 50px -12px rgba(139, 92, 246, 0.25);
}

.grid {
    display: grid;
    gap: 1.5rem;
    grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.7rem 1.4rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: transparent;
    color: var(--text);
    font: inherit;
    font-weight: 600;
    cursor: pointer;
    text-decoration: none;
    transition: transform 0.2s ease, background 0.2s ease, opacity 0.2s ease;
}

.btn:hover { transform: scale(1.04); }
.btn:disabled { opacity: 0.6; cursor: progress; transform: none; }

.btn-primary {
    background: linear-gradient(120deg, var(--primary), var(--secondary));
    border-color: transparent;
}

.btn-ghost:hover { background: var(--surface); }

.btn-active {
    background: var(--primary);
    border-color: var(--primary);
}

.chip {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    margin: 0.2rem;
    border-radius: 999px;
    border: 1px solid var(--border);
    background: rgba(59, 130, 246, 0.1);
    color: var(--text);
    font: inherit;
    font-size: 0.85rem;
}

.chip-copy { cursor: copy; }
.chip-copy:hover { background: rgba(139, 92, 246, 0.2); }

.glyph {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    min-width: 1.5em;
    font-family: var(--mono);
}

/* Canvases */
.particle-host { position: relative; overflow: hidden; }

.particle-canvas {
    position: absolute;
    inset: 0;
    width: 100%;
    height: 100%;
    z-index: 0;
}

.particle-host > .content { position: relative; z-index: 2; pointer-events: none; }
.particle-host > .content * { pointer-events: auto; }

.confetti-canvas {
    position: fixed;
    inset: 0;
    width: 100vw;
    height: 100vh;
    pointer-events: none;
    z-index: 100;
}

/* Floating badges */
.floating-icon {
    width: 4.5rem;
    height: 4.5rem;
    perspective: 400px;
    pointer-events: none;
}

.floating-icon .solid {
    width: 100%;
    height: 100%;
    transform-style: preserve-3d;
    opacity: 0.85;
}

.solid-torus { border-radius: 50%; border: 0.9rem solid var(--solid-color); }
.solid-box { background: var(--solid-color); border-radius: 6px; }
.solid-sphere {
    border-radius: 50%;
    background: radial-gradient(circle at 30% 30%, #fff8, var(--solid-color) 60%);
}
.solid-plate { background: var(--solid-color); border-radius: 4px; height: 30% !important; margin-top: 35%; }

/* Typewriter */
.typewriter { font-family: var(--mono); }
.typewriter-caret { animation: blink 1s step-end infinite; margin-left: 2px; }

@keyframes blink { 50% { opacity: 0; } }

/* Avatar */
.avatar {
    width: 10rem;
    height: 10rem;
    border-radius: 50%;
    overflow: hidden;
    display: flex;
    align-items: center;
    justify-content: center;
    background: linear-gradient(135deg, var(--primary), var(--secondary));
    box-shadow: 0 0 60px rgba(139, 92, 246, 0.35);
}

.avatar-image { width: 100%; height: 100%; object-fit: cover; }
.avatar-initial { font-size: 4rem; font-weight: 800; }

/* Skill bars */
.skill-bar { margin-bottom: 1rem; }
.skill-bar-head { display: flex; justify-content: space-between; font-size: 0.95rem; }
.skill-level { color: var(--text-muted); font-family: var(--mono); }

.skill-track {
    height: 0.5rem;
    border-radius: 999px;
    background: rgba(255, 255, 255, 0.08);
    overflow: hidden;
}

.skill-fill {
    height: 100%;
    border-radius: inherit;
    background: linear-gradient(90deg, var(--primary), var(--accent));
    transition: width 1.5s ease-out;
}

/* Contact form */
.contact-form { display: grid; gap: 1rem; }
.form-row { display: grid; gap: 0.35rem; }
.form-row label { font-size: 0.9rem; color: var(--text-muted); }

.contact-form input,
.contact-form select,
.contact-form textarea {
    width: 100%;
    padding: 0.75rem 1rem;
    border-radius: 10px;
    border: 1px solid var(--border);
    background: var(--bg-elevated);
    color: var(--text);
    font: inherit;
}

.contact-form input:focus,
.contact-form select:focus,
.contact-form textarea:focus {
    outline: 2px solid var(--secondary);
    outline-offset: 1px;
}

.form-error { color: var(--danger); margin: 0; }

/* Toasts */
.toast-stack {
    position: fixed;
    right: 1.25rem;
    bottom: 1.25rem;
    display: grid;
    gap: 0.75rem;
    z-index: 200;
    width: min(24rem, calc(100vw - 2.5rem));
}

.toast {
    display: flex;
    gap: 0.75rem;
    align-items: flex-start;
    padding: 1rem 1.25rem;
    border-radius: 12px;
    border: 1px solid var(--border);
    background: var(--bg-elevated);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
    animation: toast-in 0.25s ease-out;
}

.toast-success { border-left: 4px solid var(--success); }
.toast-error { border-left: 4px solid var(--danger); }
.toast-info { border-left: 4px solid var(--accent); }

.toast-body { flex: 1; }
.toast-title { margin: 0; font-weight: 700; }
.toast-description { margin: 0.15rem 0 0; color: var(--text-muted); font-size: 0.9rem; }

.toast-close {
    background: none;
    border: 0;
    color: var(--text-muted);
    font-size: 1.25rem;
    cursor: pointer;
}

@keyframes toast-in {
    from { opacity: 0; transform: translateY(12px); }
    to { opacity: 1; transform: none; }
}

/* Entrance animation, replayed whenever the element is re-mounted */
.enter { animation: enter 0.6s ease-out both; }

@keyframes enter {
    from { opacity: 0; transform: translateY(30px); }
    to { opacity: 1; transform: none; }
}

@media (prefers-reduced-motion: reduce) {
    *, *::before, *::after { animation: none !important; transition: none !important; }
    html { scroll-behavior: auto; }
}
"#;
