/// Layout rules for the tab-switching site, appended to `BASE_CSS`.
pub const SITE_CSS: &str = r#"
.topbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.9rem 2rem;
    background: rgba(11, 13, 23, 0.7);
    backdrop-filter: blur(16px);
    border-bottom: 1px solid var(--border);
}

.brand {
    background: none;
    border: 0;
    font: inherit;
    font-size: 1.4rem;
    font-weight: 800;
    cursor: pointer;
}

.topbar-links { display: flex; gap: 0.25rem; }

.nav-link,
.drawer-link {
    display: inline-flex;
    align-items: center;
    gap: 0.4rem;
    padding: 0.5rem 0.9rem;
    border: 0;
    border-radius: 999px;
    background: none;
    color: var(--text-muted);
    font: inherit;
    cursor: pointer;
    transition: color 0.2s ease, background 0.2s ease;
}

.nav-link:hover,
.drawer-link:hover { color: var(--text); }

.nav-link.active,
.drawer-link.active {
    color: var(--text);
    background: linear-gradient(120deg, rgba(59, 130, 246, 0.3), rgba(139, 92, 246, 0.3));
}

.hamburger {
    display: none;
    flex-direction: column;
    gap: 5px;
    padding: 0.5rem;
    background: none;
    border: 0;
    cursor: pointer;
}

.hamburger span {
    width: 24px;
    height: 2px;
    background: var(--text);
    transition: transform 0.3s ease, opacity 0.3s ease;
}

.hamburger.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
.hamburger.open span:nth-child(2) { opacity: 0; }
.hamburger.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }

.drawer {
    position: fixed;
    top: 0;
    right: 0;
    bottom: 0;
    width: min(18rem, 80vw);
    z-index: 60;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    padding: 5rem 1.5rem 2rem;
    background: var(--bg-elevated);
    transform: translateX(100%);
    transition: transform 0.3s ease;
}

.drawer.open { transform: none; }

.drawer-overlay {
    position: fixed;
    inset: 0;
    z-index: 55;
    background: rgba(0, 0, 0, 0.5);
}

main { min-height: 100vh; }

.panel { min-height: 100vh; }

.page {
    min-height: 100vh;
    padding: 7rem 2rem 4rem;
    max-width: 72rem;
    margin: 0 auto;
}

.page.particle-host { max-width: none; }
.page.particle-host > .content { max-width: 72rem; margin: 0 auto; }

.hero {
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
}

.hero-content { padding: 0 1.5rem; }
.hero-kicker { color: var(--accent); letter-spacing: 0.2em; text-transform: uppercase; }
.hero-name { font-size: clamp(3rem, 10vw, 6rem); margin: 0.5rem 0; line-height: 1.1; }
.hero-description { max-width: 38rem; margin: 0 auto 2rem; font-size: 1.2rem; }
.hero-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
.hero-links { display: flex; gap: 1.25rem; justify-content: center; margin-top: 2rem; }
.hero-link { font-size: 1.25rem; color: var(--text-muted); text-decoration: none; }
.hero-link:hover { color: var(--text); }

.orbit { position: absolute; z-index: 1; }
.orbit-left { top: 22%; left: 10%; }
.orbit-right { top: 30%; right: 12%; }
.orbit-bottom { bottom: 18%; left: 48%; }

.about-grid { display: grid; gap: 3rem; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
.stat-grid { display: grid; gap: 1rem; grid-template-columns: repeat(2, 1fr); }
.stat { display: grid; gap: 0.25rem; text-align: center; }
.stat-value { font-size: 2rem; }

.subheading { margin: 3rem 0 1.5rem; text-align: center; }
.featured-grid { margin-bottom: 1.5rem; }
.card.featured { border-color: rgba(139, 92, 246, 0.45); }
.project-thumb { font-size: 3rem; }
.project-links { display: flex; gap: 0.75rem; margin-top: 1rem; }
.chips { display: flex; flex-wrap: wrap; }

.skill-group { position: relative; }
.skill-group-title { display: flex; align-items: center; gap: 0.5rem; }
.skill-average { margin-left: auto; font-size: 0.85rem; font-weight: 400; }
.skill-badge { position: absolute; top: -1.5rem; right: -1rem; width: 3rem; height: 3rem; }

.article-meta { display: flex; justify-content: space-between; font-size: 0.85rem; }
.read-more { color: var(--accent); text-decoration: none; font-weight: 600; }

.coding-card { text-decoration: none; text-align: center; }
.coding-badge { font-size: 2.5rem; }
.coding-stats { display: flex; justify-content: space-around; margin: 0; }
.coding-stats dd { margin: 0; font-size: 1.4rem; font-weight: 700; }

.contact-grid { display: grid; gap: 2rem; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); }
.contact-side { display: grid; gap: 1rem; align-content: start; }
.contact-entry { display: flex; align-items: center; gap: 1rem; }
.contact-entry p { margin: 0; }
.copy-btn { margin-left: auto; padding: 0.35rem 0.9rem; }
.form-offline { margin: 0; }
.socials { display: flex; gap: 1rem; justify-content: center; }
.social { font-size: 1.2rem; text-decoration: none; }

.indicator {
    position: fixed;
    right: 1.25rem;
    top: 50%;
    transform: translateY(-50%);
    display: grid;
    gap: 0.75rem;
    z-index: 40;
}

.indicator-dot {
    width: 0.7rem;
    height: 0.7rem;
    padding: 0;
    border-radius: 50%;
    border: 1px solid var(--text-muted);
    background: transparent;
    cursor: pointer;
    transition: transform 0.2s ease, background 0.2s ease;
}

.indicator-dot.active {
    background: var(--secondary);
    border-color: var(--secondary);
    transform: scale(1.3);
}

@media (max-width: 860px) {
    .topbar-links { display: none; }
    .hamburger { display: flex; }
    .indicator { display: none; }
}
"#;
