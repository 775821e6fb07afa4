use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::{BASE_COMPONENTS, MOTION_KEYFRAMES};
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

// the global stylesheet, page-specific sheets are appended by the app
pub const MODERN_STYLES: &str = concat!(
    CSS_VARIABLES,
    r#"
*, *::before, *::after { box-sizing: border-box; }

html, body { margin: 0; }

body {
  font-family: var(--font-body);
  color: var(--text-primary);
  background: var(--background);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

h1, h2, h3 { font-family: var(--font-display); line-height: 1.2; margin: 0; }
p { margin: 0 0 var(--space-3); }
a { color: var(--primary-dark); text-decoration: none; }
a:hover { color: var(--primary); }
"#,
    BASE_COMPONENTS,
    MOTION_KEYFRAMES,
    r#"
.app-header {
  position: sticky;
  top: 0;
  z-index: 20;
  background: rgba(255, 255, 255, 0.85);
  backdrop-filter: blur(12px);
  border-bottom: 1px solid var(--border);
}

.nav-container {
  max-width: var(--container-width);
  height: var(--header-height);
  margin: 0 auto;
  padding: 0 var(--space-6);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo a {
  font-family: var(--font-display);
  font-size: 1.5rem;
  font-weight: 700;
  background: var(--gradient-brand);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.nav-links { display: flex; align-items: center; gap: var(--space-2); }

.nav-link {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  color: var(--text-secondary);
  font-weight: 500;
  transition: background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover { background: var(--neutral-100); color: var(--text-primary); }
.nav-link.active { background: var(--primary-tint); color: var(--primary-dark); }

.page-content { padding: var(--space-8) 0 var(--space-16); }

.section-title {
  font-size: 1.75rem;
  margin-bottom: var(--space-4);
}

.config-error {
  max-width: 640px;
  margin: var(--space-16) auto;
  padding: var(--space-6) var(--space-8);
  border-radius: var(--radius-lg);
  border: 1px solid var(--error);
  background: var(--surface);
}

.config-error pre { white-space: pre-wrap; color: var(--error); }
"#
);
