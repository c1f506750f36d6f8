/// Layout rules for the scroll-spy site, appended to `BASE_CSS`.
pub const SITE_CSS: &str = r#"
body { overflow-x: hidden; }

/* Backdrop */
.backdrop { position: fixed; inset: 0; pointer-events: none; overflow: hidden; z-index: 0; }

.blob { position: absolute; border-radius: 50%; filter: blur(64px); }

.blob-primary {
    top: -10rem;
    right: -10rem;
    width: 20rem;
    height: 20rem;
    background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(139, 92, 246, 0.2));
    animation: drift-a 20s ease-in-out infinite;
}

.blob-secondary {
    top: 50%;
    left: -8rem;
    width: 16rem;
    height: 16rem;
    background: linear-gradient(135deg, rgba(6, 182, 212, 0.15), rgba(59, 130, 246, 0.15));
    animation: drift-b 25s ease-in-out 5s infinite;
}

.blob-accent {
    bottom: 5rem;
    right: 5rem;
    width: 12rem;
    height: 12rem;
    background: linear-gradient(135deg, rgba(139, 92, 246, 0.1), rgba(6, 182, 212, 0.1));
    animation: drift-c 15s ease-in-out 10s infinite;
}

@keyframes drift-a { 50% { transform: translate(100px, -50px) scale(1.2); } }
@keyframes drift-b { 50% { transform: translate(-80px, 80px) scale(0.8); } }
@keyframes drift-c { 50% { transform: translate(-60px, -40px) scale(1.1); } }

.dot {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: rgba(59, 130, 246, 0.3);
    animation: twinkle 4s ease-in-out infinite;
}

@keyframes twinkle {
    0%, 100% { transform: none; opacity: 0.3; }
    50% { transform: translateY(-20px); opacity: 0.8; }
}

/* Sidebar */
.sidebar {
    position: fixed;
    top: 0;
    left: 0;
    bottom: 0;
    width: 20rem;
    z-index: 40;
    display: flex;
    flex-direction: column;
    padding: 1.5rem;
    background: rgba(19, 23, 40, 0.8);
    backdrop-filter: blur(20px);
    border-right: 1px solid var(--border);
    transition: box-shadow 0.3s ease, transform 0.3s ease;
}

.sidebar.scrolled { box-shadow: 0 10px 40px rgba(0, 0, 0, 0.45); }

.sidebar-logo { margin: 0 0 2rem; font-size: 1.6rem; }

.sidebar-nav { flex: 1; display: grid; gap: 0.4rem; align-content: start; overflow-y: auto; }

.sidebar-link {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.7rem 0.9rem;
    border: 1px solid transparent;
    border-radius: 10px;
    background: none;
    color: var(--text-muted);
    font: inherit;
    text-align: left;
    cursor: pointer;
    transition: transform 0.2s ease, background 0.2s ease, color 0.2s ease;
}

.sidebar-link:hover { background: var(--surface); transform: translateX(4px); color: var(--text); }

.sidebar-link.active {
    color: var(--primary);
    background: rgba(59, 130, 246, 0.2);
    border-color: rgba(59, 130, 246, 0.3);
    box-shadow: 0 0 24px rgba(59, 130, 246, 0.25);
}

.sidebar-footer { display: grid; gap: 1rem; padding-top: 1.5rem; border-top: 1px solid var(--border); }
.sidebar-socials { display: flex; justify-content: center; gap: 1rem; }
.sidebar-socials a { text-decoration: none; padding: 0.5rem; border-radius: 8px; background: var(--surface); }
.sidebar-resume { justify-content: center; }

.menu-button {
    display: none;
    position: fixed;
    top: 1rem;
    left: 1rem;
    z-index: 50;
    padding: 0.5rem 0.75rem;
    border-radius: 8px;
    border: 1px solid var(--border);
    background: rgba(19, 23, 40, 0.8);
    color: var(--text);
    font-size: 1.25rem;
    cursor: pointer;
}

/* Main column */
.main { position: relative; z-index: 1; margin-left: 20rem; }
.column { max-width: 56rem; margin: 0 auto; padding: 2rem 1.5rem; }

.section { padding: 5rem 0; }
.section-header { margin-bottom: 3rem; }
.subheading { text-align: center; margin: 3rem 0 1.5rem; color: var(--primary); }
.card-title { color: var(--primary); margin-top: 0; }
.center { text-align: center; }
.stack { display: grid; gap: 1.5rem; align-content: start; }
.split { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); margin: 2rem 0; }
.button-row { display: flex; flex-wrap: wrap; gap: 0.5rem; justify-content: center; margin-bottom: 2rem; }
.chips { display: flex; flex-wrap: wrap; margin: 0.75rem 0; }
.wide { width: 100%; justify-content: center; }

.chip-accent { background: rgba(59, 130, 246, 0.2); color: var(--primary); }
.chip-featured { background: rgba(6, 182, 212, 0.2); color: var(--accent); }
.chip-current { background: rgba(16, 185, 129, 0.2); color: var(--success); }

.highlight-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    min-width: 2.75rem;
    height: 2.75rem;
    border-radius: 10px;
    background: rgba(59, 130, 246, 0.2);
    color: var(--primary);
}

/* Home */
.home { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; text-align: center; position: relative; }
.home-avatar { position: relative; margin-bottom: 2rem; }
.home-avatar .avatar { width: 8rem; height: 8rem; position: relative; z-index: 1; border: 4px solid rgba(59, 130, 246, 0.3); }
.avatar-ring {
    position: absolute;
    inset: -4px;
    border-radius: 50%;
    background: conic-gradient(var(--primary), var(--secondary), var(--accent), var(--primary));
    filter: blur(4px);
    opacity: 0.5;
    animation: spin 8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

.home-title { font-size: clamp(2.5rem, 7vw, 4.5rem); margin: 0 0 1.5rem; }
.home-role { min-height: 4rem; font-size: clamp(1.25rem, 3vw, 1.9rem); font-weight: 400; margin: 0 0 2rem; }
.home-pitch { max-width: 44rem; font-size: 1.15rem; margin: 0 auto 2rem; }
.home-actions { display: flex; gap: 1rem; flex-wrap: wrap; justify-content: center; margin-bottom: 3rem; }
.home-chips { justify-content: center; }
.scroll-hint {
    position: absolute;
    bottom: 2rem;
    background: none;
    border: 0;
    color: var(--text-muted);
    font-size: 2rem;
    cursor: pointer;
    animation: bob 2s ease-in-out infinite;
}

@keyframes bob { 50% { transform: translateY(10px); } }

/* Projects */
.project-grid { grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); }
.project-head { display: flex; justify-content: space-between; align-items: flex-start; gap: 1rem; }
.project-head h3 { margin: 0 0 0.5rem; }
.project-points { padding-left: 1.1rem; }
.project-links { display: flex; gap: 0.75rem; }

/* Skills */
.skill-group-title { color: var(--primary); margin-top: 0; }
.skill-copy { cursor: copy; transition: transform 0.2s ease; }
.skill-copy:hover { transform: translateX(5px); }
.cloud { display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; }

/* Achievements */
.timeline { list-style: none; padding: 0; margin: 0 0 3rem; position: relative; display: grid; gap: 2rem; }
.timeline::before {
    content: "";
    position: absolute;
    left: 50%;
    top: 0;
    bottom: 0;
    width: 2px;
    background: linear-gradient(var(--primary), var(--secondary));
    opacity: 0.3;
}
.timeline-item { position: relative; width: calc(50% - 2rem); }
.timeline-right { margin-left: auto; }
.timeline-dot {
    position: absolute;
    top: 1.5rem;
    right: -2.5rem;
    width: 1rem;
    height: 1rem;
    border-radius: 50%;
    background: var(--primary);
    border: 4px solid var(--bg);
}
.timeline-right .timeline-dot { right: auto; left: -2.5rem; }
.timeline-card { display: flex; gap: 1rem; }
.timeline-head { display: flex; justify-content: space-between; gap: 0.75rem; align-items: baseline; }
.timeline-head h3 { margin: 0; font-size: 1.05rem; }

.stat-row { display: grid; gap: 1.5rem; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); margin: 2rem 0; }
.stat { display: grid; gap: 0.35rem; text-align: center; justify-items: center; }
.stat-value { font-size: 1.9rem; color: var(--primary); }

/* About */
.prose .lead { font-size: 1.1rem; }
.bullets { margin: 0; padding-left: 1.1rem; display: grid; gap: 0.4rem; grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr)); }
.highlight { text-align: center; display: grid; justify-items: center; gap: 0.5rem; }
.highlight h3 { margin: 0; }

.callout { display: flex; align-items: center; gap: 1rem; max-width: 40rem; margin: 2rem auto 0; }
.callout-emoji { font-size: 2.5rem; }
.callout-title { margin: 0; font-weight: 700; }
.callout p { margin: 0.15rem 0; }

/* Education, certificates, languages */
.education-card { display: flex; gap: 1.25rem; }
.education-body { flex: 1; }
.education-head { display: flex; justify-content: space-between; gap: 1rem; }
.education-head h3 { margin: 0; }
.education-institution { margin: 0.35rem 0; font-size: 1.05rem; }

.certificate { display: grid; gap: 0.75rem; }
.certificate-head { display: flex; gap: 1rem; align-items: flex-start; }
.certificate-head > div { flex: 1; }
.certificate-head h3 { margin: 0; }
.certificate-issuer { margin: 0.2rem 0 0.5rem; color: var(--primary); }

.strength { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.9rem 1.25rem; }
.quote { font-style: italic; color: var(--text-muted); max-width: 40rem; margin: 3rem auto 0; text-align: center; }

.language { text-align: center; }
.language-flag { font-size: 3rem; }
.language .skill-bar { text-align: left; margin-top: 1rem; }

/* Contact */
.contact-entry { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 0; }
.contact-text { flex: 1; }
.contact-text p { margin: 0; }
.icon-btn { padding: 0.4rem 0.7rem; }
.socials { display: flex; gap: 1rem; margin-bottom: 1.5rem; }
.social { font-size: 1.25rem; text-decoration: none; padding: 0.9rem; border-radius: 10px; background: var(--surface); }

/* Chrome */
.back-to-top {
    position: fixed;
    right: 1.5rem;
    bottom: 1.5rem;
    z-index: 50;
    width: 3rem;
    height: 3rem;
    border-radius: 50%;
    border: 1px solid rgba(59, 130, 246, 0.3);
    background: rgba(59, 130, 246, 0.2);
    backdrop-filter: blur(12px);
    color: var(--primary);
    font-size: 1.25rem;
    cursor: pointer;
    animation: toast-in 0.25s ease-out;
}

.back-to-top:hover { transform: translateY(-2px) scale(1.1); }

.toast-stack { bottom: 5.5rem; }

.footer {
    position: relative;
    z-index: 1;
    margin-left: 20rem;
    padding: 2rem 1.5rem;
    text-align: center;
    border-top: 1px solid var(--border);
    background: rgba(19, 23, 40, 0.5);
}

.footer-links { display: flex; gap: 1.5rem; justify-content: center; margin: 1rem 0; }
.footer-links a { color: var(--text-muted); text-decoration: none; }
.footer-links a:hover { color: var(--primary); }
.footer-copyright { font-size: 0.85rem; color: var(--text-muted); }

@media (max-width: 1024px) {
    .sidebar { transform: translateX(-100%); }
    .sidebar.open { transform: none; }
    .menu-button { display: block; }
    .main, .footer { margin-left: 0; }
    .timeline::before { left: 1rem; }
    .timeline-item, .timeline-right { width: auto; margin-left: 2.5rem; }
    .timeline-dot, .timeline-right .timeline-dot { left: -2rem; right: auto; }
}
"#;
