//! Global CSS styles for Folio.
//!
//! Layout, typography and component rules. Every color reads one of the
//! palette variables, so a palette edit restyles the page without touching
//! this sheet.

pub const GLOBAL_STYLES: &str = r#"
/* === Non-palette tokens === */
:root {
  --font-sans: 'Inter', -apple-system, 'Segoe UI', Roboto, sans-serif;
  --on-accent: #f8fafc;
  --muted: #64748b;

  --radius-sm: 6px;
  --radius-md: 10px;
  --radius-lg: 16px;

  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 700ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-color);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

button {
  font: inherit;
  cursor: pointer;
}

/* === Scrollbars === */
::-webkit-scrollbar { width: 10px; }
::-webkit-scrollbar-track { background: var(--scrollbar-track); }
::-webkit-scrollbar-thumb {
  background: var(--scrollbar-thumb);
  border-radius: 5px;
}
::-webkit-scrollbar-thumb:hover { background: var(--scrollbar-thumb-hover); }

/* === Root & Layout === */
.folio-root {
  position: relative;
  min-height: 100vh;
  background: var(--bg-color);
  color: var(--text-primary);
  transition: background-color var(--transition-normal), color var(--transition-normal);
}

.background-layer {
  position: fixed;
  inset: 0;
  z-index: 0;
}

.page {
  position: relative;
  z-index: 10;
}

.container {
  width: 100%;
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 1.5rem;
}

.load-screen {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  font-size: 1.25rem;
  color: #94a3b8;
  background: var(--bg-color, #0a192f);
}

.load-failed { color: #f87171; }
.load-detail { font-size: 0.875rem; color: #94a3b8; }

.accent-text { color: var(--accent-color); }
.muted-text { color: var(--muted); font-size: 0.875rem; }
.text-glow { text-shadow: var(--accent-glow); }

.icon-sm { width: 1.25rem; height: 1.25rem; }
.icon-md { width: 1.5rem; height: 1.5rem; }
.icon-lg { width: 2.5rem; height: 2.5rem; flex-shrink: 0; }

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 2rem;
  border-radius: var(--radius-md);
  font-weight: 600;
  border: 1px solid transparent;
  transition: all var(--transition-normal);
}

.btn:disabled { opacity: 0.5; cursor: not-allowed; }

.btn-solid {
  background: var(--accent-color);
  color: var(--on-accent);
  box-shadow: var(--accent-shadow);
}
.btn-solid:hover { filter: brightness(1.1); }

.btn-outline {
  background: transparent;
  color: var(--accent-color);
  border-color: var(--accent-color);
  padding: 0.5rem 1rem;
}
.btn-outline:hover { background: var(--accent-hover-bg); }

.btn-card {
  background: var(--card-bg);
  color: var(--text-primary);
}
.btn-card:hover {
  background: var(--card-bg-hover);
  color: var(--text-title);
}

.btn-ghost, .icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: transparent;
  color: var(--text-primary);
  transition: color var(--transition-normal), background var(--transition-normal);
}
.btn-ghost:hover, .icon-btn:hover {
  color: var(--accent-color);
  background: var(--card-bg-hover);
}

.full-width { width: 100%; }

.icon-link {
  color: var(--text-secondary);
  transition: color var(--transition-normal);
}
.icon-link:hover { color: var(--accent-color); }

/* === Header === */
.site-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: transparent;
  transition: all var(--transition-normal);
}

.site-header.solid {
  background: var(--header-bg);
  backdrop-filter: blur(16px);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
}

.nav-bar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding-top: 1rem;
  padding-bottom: 1rem;
}

.brand {
  font-size: 1.5rem;
  font-weight: 700;
  letter-spacing: 0.05em;
  color: var(--text-title);
}

.nav-links {
  display: flex;
  gap: 1.5rem;
}

.nav-link {
  color: var(--text-primary);
  transition: color var(--transition-normal);
}
.nav-link:hover { color: var(--accent-color); }

.nav-actions {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.menu-toggle { display: none; }

.mobile-menu {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 0 1.5rem 1rem;
  text-align: center;
}

@media (max-width: 768px) {
  .nav-links, .nav-cta { display: none; }
  .menu-toggle { display: inline-flex; }
}

/* === Hero === */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2.5rem;
}

.hero-text { max-width: 42rem; }

.hero-title {
  font-size: 3.75rem;
  font-weight: 900;
  line-height: 1.1;
  letter-spacing: -0.03em;
  color: var(--text-title);
}

.hero-bio {
  margin-top: 1.5rem;
  font-size: 1.125rem;
  color: var(--text-secondary);
}

.hero-actions {
  margin-top: 2rem;
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.headshot {
  width: 20rem;
  height: 20rem;
  border-radius: 50%;
  overflow: hidden;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--card-bg);
  border: 4px solid var(--accent-color-translucent);
}

.headshot img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.headshot-placeholder { color: var(--text-secondary); }

@media (max-width: 768px) {
  .hero {
    flex-direction: column-reverse;
    justify-content: center;
    text-align: center;
  }
  .hero-title { font-size: 2.25rem; }
  .hero-actions { justify-content: center; }
  .headshot { width: 16rem; height: 16rem; }
}

/* === Sections === */
.reveal-section {
  padding: 5rem 0;
  min-height: 4rem;
  opacity: 0;
  transition: opacity var(--transition-slow);
}

.reveal-section.revealed { opacity: 1; }

.section-body { margin: 0 auto; }
.section-body.narrow { max-width: 56rem; }
.section-body.wide { max-width: 72rem; }
.section-body.centered { text-align: center; }

.section-heading { margin-bottom: 3rem; }
.section-heading.centered { text-align: center; }

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  color: var(--text-title);
  margin-bottom: 1rem;
}

.section-rule {
  height: 4px;
  width: 6rem;
  background: var(--accent-color);
}
.section-heading.centered .section-rule { margin: 0 auto; }

.about-paragraph {
  margin-top: 1rem;
  font-size: 1.125rem;
  line-height: 1.8;
  color: var(--text-secondary);
}

/* === Cards === */
.card {
  background: var(--card-bg);
  border-radius: var(--radius-md);
  padding: 1.5rem;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
  transition: transform var(--transition-normal), background var(--transition-normal);
}
.card:hover {
  transform: translateY(-0.5rem);
  background: var(--card-bg-hover);
}

.card-title {
  font-size: 1.2rem;
  font-weight: 700;
  color: var(--text-title);
  margin-bottom: 0.75rem;
}

.card-text {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.tag-row {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
  margin: 1rem 0;
}

.tag {
  padding: 0.25rem 0.5rem;
  border-radius: 9999px;
  background: var(--card-bg-hover);
  color: var(--accent-color);
  font-size: 0.75rem;
  font-weight: 600;
}

/* === Experience timeline === */
.timeline {
  position: relative;
  margin-left: 1rem;
  border-left: 2px solid var(--border-color);
  text-align: left;
}

.timeline-item {
  position: relative;
  margin: 0 0 1.5rem 2rem;
}

.timeline-dot {
  position: absolute;
  left: -3rem;
  width: 2rem;
  height: 2rem;
  border-radius: 50%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--card-bg);
  box-shadow: 0 0 0 4px var(--border-color);
}

.timeline-dot-inner {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 50%;
  background: var(--accent-color);
}

.timeline-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  cursor: pointer;
}

.timeline-role {
  font-size: 1.25rem;
  font-weight: 600;
  color: var(--text-title);
}

.timeline-role .at { margin: 0 0.5rem; }

.timeline-period {
  display: block;
  margin-top: 0.25rem;
  font-size: 0.875rem;
  color: var(--muted);
}

.chevron {
  color: var(--text-secondary);
  transition: transform var(--transition-normal);
}
.chevron.open { transform: rotate(180deg); }

.timeline-panel {
  display: grid;
  grid-template-rows: 0fr;
  opacity: 0;
  transition: all 500ms ease-in-out;
}
.timeline-panel.open {
  grid-template-rows: 1fr;
  opacity: 1;
  margin-top: 1rem;
}

.timeline-panel-inner { overflow: hidden; }

.timeline-points {
  list-style: disc inside;
  color: var(--text-secondary);
}
.timeline-points li + li { margin-top: 0.5rem; }

/* === Skills === */
.skill-categories {
  display: flex;
  flex-direction: column;
  gap: 3rem;
}

.skill-category-title {
  font-size: 1.5rem;
  font-weight: 600;
  color: var(--accent-color);
  margin-bottom: 1.5rem;
}

.skill-grid {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
}

.skill-tile {
  width: 8rem;
  height: 8rem;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: var(--radius-md);
  background: var(--card-bg);
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.15);
  transition: transform var(--transition-normal);
}
.skill-tile:hover { transform: translateY(-0.5rem); }

.skill-badge {
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  border: 2px solid;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 800;
  font-size: 0.9rem;
}

.skill-name {
  color: var(--text-primary);
  font-weight: 500;
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
  gap: 2rem;
}

.project-card {
  display: flex;
  flex-direction: column;
  justify-content: space-between;
  text-align: left;
}
.project-card:hover { box-shadow: var(--accent-shadow); }

.project-links {
  display: flex;
  gap: 1rem;
  margin-top: 1rem;
}

/* === Certifications === */
.cert-list {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.cert-card {
  display: flex;
  align-items: flex-start;
  gap: 1.5rem;
}
.cert-card:hover { transform: translateY(-0.25rem); }

.cert-body { flex-grow: 1; }

/* === Contact & Footer === */
.contact-invitation {
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: 2.5rem;
}

.contact-actions {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
}

.site-footer {
  margin-top: 5rem;
  border-top: 1px solid var(--border-color);
  background: var(--bg-color);
}

.footer-row {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding-top: 1.5rem;
  padding-bottom: 1.5rem;
}

.footer-links {
  display: flex;
  gap: 1.5rem;
}

/* === Customizer drawer === */
.drawer {
  position: fixed;
  top: 0;
  right: 0;
  height: 100%;
  width: 20rem;
  max-width: 90vw;
  z-index: 60;
  display: flex;
  flex-direction: column;
  background: var(--card-bg);
  border-left: 1px solid var(--border-color);
  box-shadow: -10px 0 40px rgba(0, 0, 0, 0.35);
  transform: translateX(100%);
  transition: transform var(--transition-normal) ease-in-out;
  backdrop-filter: blur(16px);
}
.drawer.open { transform: translateX(0); }

.drawer-header, .drawer-footer {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
  border-bottom: 1px solid var(--border-color);
}
.drawer-footer {
  margin-top: auto;
  border-bottom: none;
  border-top: 1px solid var(--border-color);
}

.drawer-title {
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--text-title);
}

.drawer-content {
  flex-grow: 1;
  overflow-y: auto;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.drawer-group-title {
  font-weight: 600;
  color: var(--text-title);
  padding-bottom: 0.5rem;
  margin-bottom: 0.75rem;
  border-bottom: 1px solid var(--border-color);
}
.drawer-group.bordered {
  padding-top: 1rem;
  border-top: 1px solid var(--border-color);
}

.tabs {
  display: flex;
  border-bottom: 1px solid var(--border-color);
}

.tab {
  padding: 0.5rem 1rem;
  font-size: 0.875rem;
  font-weight: 500;
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  color: var(--text-secondary);
  transition: color var(--transition-fast);
}
.tab:hover { color: var(--text-primary); }
.tab.active {
  color: var(--accent-color);
  border-bottom-color: var(--accent-color);
}

.color-field {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.5rem 0;
}

.color-field-label {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.color-swatch-wrapper {
  position: relative;
  width: 2rem;
  height: 2rem;
}

.color-input {
  width: 2rem;
  height: 2rem;
  border: 0;
  padding: 0;
  opacity: 0;
  cursor: pointer;
}

.color-swatch {
  position: absolute;
  inset: 0;
  border-radius: var(--radius-sm);
  border: 1px solid var(--border-color);
  pointer-events: none;
}

.select-wrapper { position: relative; }

.select-field {
  width: 100%;
  padding: 0.5rem 0.75rem;
  appearance: none;
  border-radius: var(--radius-sm);
  border: 1px solid var(--border-color);
  background: var(--card-bg-hover);
  color: var(--text-primary);
}
.select-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--accent-color);
}

.select-chevron {
  position: absolute;
  top: 0;
  bottom: 0;
  right: 0.5rem;
  display: flex;
  align-items: center;
  pointer-events: none;
  color: var(--text-secondary);
}

/* === Assistant === */
.chat-fab {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  z-index: 50;
  padding: 1rem;
  border: none;
  border-radius: 9999px;
  background: var(--accent-color);
  color: var(--on-accent);
  box-shadow: var(--accent-shadow);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}
.chat-fab.hidden {
  transform: scale(0);
  opacity: 0;
}

.chat-panel {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  z-index: 50;
  width: calc(100% - 3rem);
  max-width: 28rem;
  height: 70vh;
  max-height: 600px;
  opacity: 0;
  pointer-events: none;
  transform: translateY(100%);
  transition: all 500ms ease-in-out;
}
.chat-panel.open {
  opacity: 1;
  pointer-events: auto;
  transform: translateY(0);
}

.chat-card {
  display: flex;
  flex-direction: column;
  height: 100%;
  background: var(--card-bg);
  border: 1px solid var(--border-color);
  border-radius: var(--radius-lg);
  box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
  backdrop-filter: blur(16px);
}

.chat-header, .chat-footer {
  flex-shrink: 0;
  padding: 1rem;
}
.chat-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  border-bottom: 1px solid var(--border-color);
}
.chat-footer { border-top: 1px solid var(--border-color); }

.chat-title-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.chat-title {
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--text-title);
}

.chat-messages {
  flex-grow: 1;
  overflow-y: auto;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.bubble-row { display: flex; }
.bubble-row.user { justify-content: flex-end; }
.bubble-row.model { justify-content: flex-start; }

.bubble {
  max-width: 20rem;
  padding: 0.5rem 1rem;
  border-radius: 1rem;
  font-size: 0.875rem;
}
.bubble.user {
  background: var(--accent-color);
  color: var(--on-accent);
  border-bottom-right-radius: 0;
  white-space: pre-wrap;
}
.bubble.model {
  background: var(--card-bg-hover);
  color: var(--text-primary);
  border-bottom-left-radius: 0;
}

.markdown p + p, .markdown ul, .markdown ol { margin-top: 0.5rem; }
.markdown ul, .markdown ol { padding-left: 1.25rem; }
.markdown strong { color: var(--text-title); }
.markdown a { color: var(--accent-color); text-decoration: underline; }
.markdown code {
  font-family: 'JetBrains Mono', monospace;
  font-size: 0.8rem;
  background: var(--accent-hover-bg);
  padding: 0 0.25rem;
  border-radius: 4px;
}

.typing {
  display: flex;
  gap: 0.25rem;
  padding: 0.25rem 0;
}

.typing-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--accent-color);
  animation: bounce 1s infinite;
}
.typing-dot:nth-child(2) { animation-delay: 0.2s; }
.typing-dot:nth-child(3) { animation-delay: 0.4s; }

.chat-form {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.input-field {
  width: 100%;
  padding: 0.5rem 1rem;
  border-radius: 9999px;
  border: 1px solid var(--border-color);
  background: var(--card-bg-hover);
  color: var(--text-primary);
}
.input-field::placeholder { color: var(--text-secondary); }
.input-field:focus {
  outline: none;
  box-shadow: 0 0 0 2px var(--accent-color);
}

.send-btn {
  display: inline-flex;
  padding: 0.75rem;
  border: none;
  border-radius: 9999px;
  background: var(--accent-color);
  color: var(--on-accent);
}
.send-btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

/* === Animations === */
@keyframes fade-in-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes bounce {
  0%, 100% { transform: translateY(-25%); }
  50% { transform: translateY(0); }
}

.fade-in-up { animation: fade-in-up 0.8s ease-out both; }
.fade-in-up.delayed { animation-delay: 200ms; }

@media (prefers-reduced-motion: reduce) {
  .fade-in-up, .typing-dot { animation: none; }
  .reveal-section { transition: none; }
}
"#;
