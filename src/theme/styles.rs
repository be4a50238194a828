//! Global CSS styles for the portfolio.
//!
//! Palettes are CSS custom properties on `.theme-dark` / `.theme-light`;
//! everything else reads the variables.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ACCENT (gradients, active links, buttons) */
  --indigo: #6366f1;
  --purple: #a855f7;
  --accent-gradient: linear-gradient(135deg, var(--indigo), var(--purple));
  --accent-glow: rgba(99, 102, 241, 0.35);

  /* Typography */
  --font-sans: 'Poppins', 'Inter', system-ui, -apple-system, sans-serif;
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2.25rem;
  --text-3xl: 3.5rem;

  /* Layout */
  --nav-height: 80px;
  --radius: 1rem;
  --section-pad: 6rem 8%;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 700ms ease;
}

.theme-dark {
  --bg: #030014;
  --bg-elevated: rgba(255, 255, 255, 0.05);
  --border: rgba(255, 255, 255, 0.1);
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);
  --text-muted: rgba(255, 255, 255, 0.45);
  --nav-bg: rgba(3, 0, 20, 0.5);
  --overlay-bg: rgba(3, 0, 20, 0.97);
}

.theme-light {
  --bg: #f9fafb;
  --bg-elevated: rgba(255, 255, 255, 0.85);
  --border: rgba(15, 23, 42, 0.1);
  --text-primary: #0f172a;
  --text-secondary: rgba(15, 23, 42, 0.72);
  --text-muted: rgba(15, 23, 42, 0.5);
  --nav-bg: rgba(249, 250, 251, 0.7);
  --overlay-bg: rgba(249, 250, 251, 0.98);
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
  line-height: 1.6;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

.app-root {
  background: var(--bg);
  color: var(--text-primary);
  min-height: 100vh;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.gradient-text {
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.muted {
  color: var(--text-muted);
}

/* === Buttons === */
.btn-gradient,
.btn-outline,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 0.75rem;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal), background var(--transition-normal);
}

.btn-gradient {
  background: var(--accent-gradient);
  color: #ffffff;
  border: none;
}

.btn-gradient:hover:not(:disabled) {
  transform: translateY(-2px);
  box-shadow: 0 10px 30px var(--accent-glow);
}

.btn-gradient:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-outline {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--indigo);
}

.btn-outline:hover {
  background: rgba(99, 102, 241, 0.1);
}

.btn-ghost {
  background: none;
  border: none;
  color: var(--text-secondary);
}

.btn-ghost:hover {
  color: var(--text-primary);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  color: var(--text-primary);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.icon-btn:hover {
  background: rgba(99, 102, 241, 0.15);
}

.see-more-btn {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  margin: 2rem auto 0;
  padding: 0.6rem 1.25rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
}

.see-more-btn:hover {
  color: var(--text-primary);
  border-color: var(--indigo);
}

/* === Form Fields === */
.form-field {
  position: relative;
  display: flex;
  align-items: center;
}

.form-field-icon {
  position: absolute;
  left: 1rem;
  color: var(--text-muted);
}

.input-field {
  width: 100%;
  padding: 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.form-field-icon + .input-field {
  padding-left: 3rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--indigo);
  box-shadow: 0 0 0 3px var(--accent-glow);
}

.input-field.textarea {
  resize: none;
  min-height: 9rem;
}

/* === Welcome Screen === */
.welcome-screen {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--bg);
  opacity: 1;
  transition: opacity 1s ease, transform 1s ease, filter 1s ease;
}

.welcome-screen.exiting {
  opacity: 0;
  transform: scale(1.1);
  filter: blur(10px);
}

.welcome-glow {
  position: absolute;
  width: 40rem;
  height: 40rem;
  border-radius: 50%;
  background: var(--accent-gradient);
  filter: blur(120px);
  opacity: 0.2;
}

.welcome-content {
  position: relative;
  text-align: center;
}

.welcome-icons {
  display: flex;
  justify-content: center;
  gap: 1.5rem;
  margin-bottom: 2rem;
}

.welcome-icon {
  display: inline-flex;
  padding: 0.9rem;
  border-radius: 50%;
  background: var(--bg-elevated);
  border: 1px solid var(--border);
  animation: float 3s ease-in-out infinite;
}

.welcome-title {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.6rem;
  font-size: var(--text-3xl);
  font-weight: 700;
}

.welcome-word {
  animation: fade-up 0.8s ease both;
}

.welcome-tagline {
  margin-top: 2rem;
  font-size: var(--text-lg);
  color: var(--text-secondary);
}

.welcome-owner {
  margin-top: 0.5rem;
  color: var(--text-muted);
}

.typing-cursor {
  margin-left: 2px;
  animation: blink 1s step-end infinite;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  height: var(--nav-height);
  transition: background var(--transition-slow), backdrop-filter var(--transition-slow);
}

.navbar.scrolled {
  background: var(--nav-bg);
  backdrop-filter: blur(12px);
}

.navbar.menu-open {
  background: var(--overlay-bg);
}

.navbar-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  height: 100%;
  padding: 0 8%;
}

.navbar-brand {
  font-size: var(--text-xl);
  font-weight: 700;
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.navbar-links {
  display: flex;
  gap: 2rem;
}

.navbar-link,
.mobile-menu-link {
  position: relative;
  color: var(--text-secondary);
  font-weight: 500;
  transition: color var(--transition-normal);
}

.navbar-link:hover,
.navbar-link.active,
.mobile-menu-link.active {
  color: var(--text-primary);
}

.navbar-link.active .nav-link-label {
  background: var(--accent-gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-link-underline {
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 100%;
  height: 2px;
  background: var(--accent-gradient);
  transform: scaleX(0);
  transform-origin: left;
  transition: transform var(--transition-normal);
}

.navbar-link:hover .nav-link-underline,
.navbar-link.active .nav-link-underline {
  transform: scaleX(1);
}

.navbar-actions {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.navbar-burger {
  display: none;
}

.mobile-menu {
  position: fixed;
  top: var(--nav-height);
  left: 0;
  right: 0;
  bottom: 0;
  z-index: 40;
  background: var(--overlay-bg);
  opacity: 0;
  transform: translateY(-100%);
  pointer-events: none;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.mobile-menu.open {
  opacity: 1;
  transform: translateY(0);
  pointer-events: auto;
}

.mobile-menu-links {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 2rem 8%;
  font-size: var(--text-lg);
}

.mobile-menu-item {
  opacity: 0;
  transform: translateX(50%);
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.mobile-menu.open .mobile-menu-item {
  opacity: 1;
  transform: translateX(0);
}

/* === Landing Layout === */
.landing {
  position: relative;
  overflow-x: hidden;
}

.landing-background {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
}

.blob {
  position: absolute;
  width: 24rem;
  height: 24rem;
  border-radius: 50%;
  filter: blur(100px);
  opacity: 0.2;
  animation: blob 10s infinite;
}

.blob-1 { top: 0; left: -4rem; background: var(--purple); }
.blob-2 { top: 0; right: -4rem; background: #06b6d4; animation-delay: 2s; }
.blob-3 { bottom: -8rem; left: 20%; background: var(--indigo); animation-delay: 4s; }

.landing-sections {
  position: relative;
  z-index: 1;
}

.section {
  min-height: 100vh;
  padding: var(--section-pad);
  padding-top: calc(var(--nav-height) + 3rem);
}

.section-heading {
  text-align: center;
  margin-bottom: 3rem;
}

.section-heading h2 {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.section-subtitle {
  margin-top: 0.75rem;
  color: var(--text-secondary);
}

.offline-banner {
  position: fixed;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 60;
  padding: 0.6rem 1.2rem;
  border-radius: 0.75rem;
  background: rgba(239, 68, 68, 0.15);
  border: 1px solid rgba(239, 68, 68, 0.4);
  font-size: var(--text-sm);
}

/* === Hero === */
.hero {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 3rem;
}

.hero-content {
  max-width: 40rem;
}

.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.4rem 1rem;
  border-radius: 999px;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  font-size: var(--text-sm);
}

.hero-badge-dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 50%;
  background: var(--accent-gradient);
}

.hero-title {
  display: flex;
  flex-direction: column;
  margin-top: 1.5rem;
  font-size: var(--text-3xl);
  font-weight: 700;
  line-height: 1.1;
}

.hero-typed {
  margin-top: 1.25rem;
  min-height: 2rem;
  font-size: var(--text-xl);
  color: var(--text-secondary);
}

.hero-description {
  margin-top: 1rem;
  color: var(--text-muted);
}

.hero-actions,
.about-actions,
.project-links {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
  margin-top: 2rem;
}

.hero-socials {
  display: flex;
  gap: 1rem;
  margin-top: 2rem;
  color: var(--text-secondary);
}

.hero-social:hover {
  color: var(--text-primary);
}

.hero-visual {
  position: relative;
  width: 24rem;
  height: 24rem;
}

.hero-orb {
  position: absolute;
  inset: 10%;
  border-radius: 50%;
  background: var(--accent-gradient);
  filter: blur(60px);
  opacity: 0.5;
  animation: float 6s ease-in-out infinite;
}

.hero-orb.secondary {
  inset: 30%;
  opacity: 0.8;
  animation-delay: 1.5s;
}

/* === About === */
.about-body {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 3rem;
}

.about-text {
  max-width: 42rem;
}

.about-greeting {
  font-size: var(--text-xl);
  margin-bottom: 1rem;
}

.about-text p {
  color: var(--text-secondary);
}

.about-quote {
  margin-top: 1.5rem;
  padding: 1rem 1.25rem;
  border-left: 3px solid var(--indigo);
  border-radius: 0 0.75rem 0.75rem 0;
  background: var(--bg-elevated);
  font-style: italic;
}

.about-avatar {
  position: relative;
  display: flex;
  align-items: center;
  justify-content: center;
  width: 18rem;
  height: 18rem;
}

.avatar-ring {
  position: absolute;
  inset: 0;
  border-radius: 50%;
  border: 3px solid transparent;
  background: var(--accent-gradient) border-box;
  -webkit-mask: linear-gradient(#000 0 0) padding-box, linear-gradient(#000 0 0);
  -webkit-mask-composite: xor;
  animation: spin 12s linear infinite;
}

.avatar-initials {
  font-size: var(--text-3xl);
  font-weight: 700;
}

.about-stats {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
  margin-top: 4rem;
}

.stat-card {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  padding: 1.5rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  backdrop-filter: blur(12px);
}

.stat-value {
  font-size: var(--text-2xl);
  font-weight: 700;
}

.stat-label {
  font-weight: 600;
  text-transform: uppercase;
  font-size: var(--text-sm);
  letter-spacing: 0.05em;
}

.stat-description {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

/* === Showcase === */
.tab-bar {
  display: flex;
  gap: 0.5rem;
  padding: 0.5rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
}

.tab {
  flex: 1;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
  padding: 1rem;
  border: none;
  border-radius: 0.75rem;
  background: transparent;
  color: var(--text-secondary);
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.tab.selected {
  background: linear-gradient(135deg, rgba(99, 102, 241, 0.2), rgba(168, 85, 247, 0.2));
  color: var(--text-primary);
}

.showcase-panels {
  margin-top: 2rem;
  touch-action: pan-y;
}

.showcase-empty {
  text-align: center;
  color: var(--text-muted);
  margin-bottom: 1rem;
}

.project-grid,
.certificate-grid {
  display: grid;
  grid-template-columns: repeat(3, 1fr);
  gap: 1.5rem;
}

.tech-grid {
  display: grid;
  grid-template-columns: repeat(6, 1fr);
  gap: 1.25rem;
}

.project-card {
  position: relative;
  overflow: hidden;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  backdrop-filter: blur(12px);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  box-shadow: 0 20px 40px rgba(99, 102, 241, 0.15);
}

.project-card-glow {
  position: absolute;
  inset: 0;
  background: linear-gradient(135deg, rgba(99, 102, 241, 0.1), rgba(168, 85, 247, 0.1));
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.project-card:hover .project-card-glow {
  opacity: 1;
}

.project-card-image img {
  width: 100%;
  height: 12rem;
  object-fit: cover;
}

.project-card-body {
  position: relative;
  padding: 1.25rem;
}

.project-card-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.project-card-description {
  margin-top: 0.5rem;
  color: var(--text-secondary);
  font-size: var(--text-sm);
  display: -webkit-box;
  -webkit-line-clamp: 2;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.project-card-actions {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin-top: 1rem;
}

.project-card-demo,
.project-card-details {
  display: inline-flex;
  align-items: center;
  gap: 0.35rem;
  font-size: var(--text-sm);
  font-weight: 500;
}

.project-card-demo {
  color: var(--indigo);
}

.project-card-details {
  padding: 0.4rem 0.9rem;
  border-radius: 0.6rem;
  background: var(--bg-elevated);
  border: 1px solid var(--border);
}

.project-card-unavailable {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.certificate-thumb {
  position: relative;
  display: block;
  width: 100%;
  overflow: hidden;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: none;
  cursor: pointer;
}

.certificate-thumb img {
  display: block;
  width: 100%;
  transition: filter var(--transition-normal);
}

.certificate-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  color: #ffffff;
  font-weight: 600;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.certificate-thumb:hover img { filter: brightness(0.4) blur(2px); }
.certificate-thumb:hover .certificate-overlay { opacity: 1; }

.lightbox {
  position: fixed;
  inset: 0;
  z-index: 90;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.85);
}

.lightbox-image {
  max-width: 90vw;
  max-height: 85vh;
  border-radius: 0.5rem;
}

.lightbox-close {
  position: absolute;
  top: 1.5rem;
  right: 1.5rem;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 50%;
  border: none;
  background: rgba(255, 255, 255, 0.15);
  color: #ffffff;
  font-size: var(--text-xl);
  cursor: pointer;
}

.tech-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.6rem;
  padding: 1.25rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  transition: transform var(--transition-normal);
}

.tech-tile:hover {
  transform: scale(1.05);
}

.tech-tile-icon {
  width: 4rem;
  height: 4rem;
}

.tech-tile-label {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

/* === Contact === */
.contact-layout {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem;
}

.contact-info {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.channel-card {
  display: flex;
  gap: 1rem;
  padding: 1.25rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  transition: border-color var(--transition-normal);
}

.channel-card:hover {
  border-color: var(--indigo);
}

.channel-text {
  display: flex;
  flex-direction: column;
}

.channel-title {
  font-weight: 600;
}

.channel-caption {
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.channel-value {
  margin-top: 0.25rem;
  color: var(--text-secondary);
}

.contact-quick-actions {
  display: flex;
  gap: 1rem;
}

.social-links {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  margin-top: 1rem;
}

.social-links-title {
  font-size: var(--text-lg);
}

.social-links-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.social-card {
  display: flex;
  align-items: center;
  gap: 0.9rem;
  padding: 1rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  transition: transform var(--transition-normal);
}

.social-card:hover {
  transform: translateY(-2px);
}

.social-card.wide {
  padding: 1.25rem;
}

.social-icon {
  display: inline-flex;
  padding: 0.6rem;
  border-radius: 0.6rem;
  background: rgba(99, 102, 241, 0.12);
}

.social-linkedin { color: #0a66c2; }
.social-instagram { color: #e4405f; }

.social-text {
  display: flex;
  flex-direction: column;
}

.social-name {
  font-weight: 600;
}

.social-sub {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

.contact-form-panel {
  padding: 2rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  backdrop-filter: blur(12px);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  margin-top: 1.5rem;
}

.contact-submit {
  width: 100%;
}

.form-notice {
  margin-top: 1.25rem;
  padding: 1rem;
  border-radius: 0.75rem;
}

.form-notice.success {
  background: rgba(34, 197, 94, 0.12);
  border: 1px solid rgba(34, 197, 94, 0.4);
}

.form-notice.error {
  background: rgba(239, 68, 68, 0.12);
  border: 1px solid rgba(239, 68, 68, 0.4);
}

/* === Footer === */
.footer {
  position: relative;
  z-index: 1;
  padding: 2rem 8% 3rem;
  text-align: center;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.footer-rule {
  border: none;
  height: 1px;
  margin-bottom: 1.5rem;
  background: var(--border);
}

/* === Project Detail === */
.project-detail {
  position: relative;
  min-height: 100vh;
  padding: 4rem 8%;
}

.project-detail.not-found {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 1.5rem;
}

.project-detail-inner {
  position: relative;
  z-index: 1;
}

.breadcrumb {
  display: flex;
  align-items: center;
  gap: 0.6rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.back-button {
  padding: 0.5rem 1rem;
  border-radius: 0.75rem;
  border: 1px solid var(--border);
  background: var(--bg-elevated);
  color: var(--text-primary);
}

.breadcrumb-current {
  color: var(--text-primary);
}

.project-detail-grid {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 3rem;
  margin-top: 3rem;
}

.project-summary h1 {
  font-size: var(--text-2xl);
}

.title-rule {
  width: 6rem;
  height: 3px;
  margin: 1rem 0 1.5rem;
  background: var(--accent-gradient);
  border-radius: 999px;
}

.project-description {
  color: var(--text-secondary);
}

.project-stats {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
  margin-top: 2rem;
}

.project-tech {
  margin-top: 2rem;
}

.tech-badges {
  display: flex;
  flex-wrap: wrap;
  gap: 0.6rem;
  margin-top: 1rem;
}

.tech-badge {
  padding: 0.4rem 0.9rem;
  border-radius: 0.6rem;
  border: 1px solid rgba(99, 102, 241, 0.3);
  background: rgba(99, 102, 241, 0.1);
  font-size: var(--text-sm);
}

.project-detail-media img {
  width: 100%;
  border-radius: var(--radius);
  border: 1px solid var(--border);
}

.project-features {
  margin-top: 2rem;
  padding: 1.5rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--bg-elevated);
}

.project-features ul {
  margin-top: 1rem;
  padding-left: 1.25rem;
  color: var(--text-secondary);
}

/* === Animations === */
@keyframes float {
  0%, 100% { transform: translateY(0); }
  50% { transform: translateY(-12px); }
}

@keyframes fade-up {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

@keyframes blink {
  50% { opacity: 0; }
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

@keyframes blob {
  0%, 100% { transform: translate(0, 0) scale(1); }
  33% { transform: translate(30px, -50px) scale(1.1); }
  66% { transform: translate(-20px, 20px) scale(0.9); }
}

/* === Responsive === */
@media (max-width: 1024px) {
  .project-grid,
  .certificate-grid { grid-template-columns: repeat(2, 1fr); }
  .tech-grid { grid-template-columns: repeat(4, 1fr); }
  .hero-visual { display: none; }
}

@media (max-width: 767px) {
  :root {
    --text-2xl: 1.75rem;
    --text-3xl: 2.5rem;
    --section-pad: 4rem 5%;
  }

  .navbar-links { display: none; }
  .navbar-burger { display: inline-flex; }

  .about-body,
  .hero { flex-direction: column; }
  .about-avatar { width: 12rem; height: 12rem; }
  .about-stats { grid-template-columns: 1fr; }

  .project-grid,
  .certificate-grid { grid-template-columns: 1fr 1fr; }
  .tech-grid { grid-template-columns: repeat(3, 1fr); }

  .contact-layout,
  .project-detail-grid { grid-template-columns: 1fr; }
}

@media (min-width: 768px) {
  .mobile-menu { display: none; }
}
"#;
