// landing page: hero carousel, quick links, featured strip, footer
pub const HOME_STYLES: &str = r#"
.home-container { display: flex; flex-direction: column; min-height: calc(100vh - var(--header-height)); }
.home-container > section { padding-block: var(--space-16); }

.hero { position: relative; min-height: 70vh; overflow: hidden; color: #fff; padding: 0; }

.hero-slide {
  position: absolute;
  inset: 0;
  display: grid;
  align-items: end;
  padding-bottom: var(--space-16);
  background: center / cover no-repeat;
}

.hero-slide::before {
  content: "";
  position: absolute;
  inset: 0;
  background: linear-gradient(20deg, rgba(28, 25, 23, 0.9) 10%, rgba(190, 24, 93, 0.35) 70%, transparent);
}

.hero-content { position: relative; max-width: 36rem; }
.hero-title { font-size: clamp(2.25rem, 5vw, 4rem); margin-bottom: var(--space-3); }
.hero-subtitle { font-size: 1.2rem; color: rgba(255, 255, 255, 0.85); }
.hero-actions { display: flex; flex-wrap: wrap; gap: var(--space-3); margin-top: var(--space-6); }

.hero-dots { position: absolute; right: var(--space-8); bottom: var(--space-8); display: flex; gap: 6px; }

.hero-dot {
  width: 8px;
  height: 8px;
  padding: 0;
  border: 1px solid #fff;
  border-radius: var(--radius-full);
  background: transparent;
  cursor: pointer;
  transition: width var(--transition-normal) var(--easing-standard);
}

.hero-dot.active { width: 32px; background: #fff; }

.quick-links { background: var(--primary-tint); }

.quick-links-grid {
  display: grid;
  grid-template-columns: repeat(5, 1fr);
  gap: var(--space-4);
  margin-top: var(--space-6);
}

.quick-link-card {
  display: flex;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-6) var(--space-4);
  border: none;
  border-radius: var(--radius-lg);
  background: var(--surface);
  font: inherit;
  text-align: center;
  align-items: center;
  cursor: pointer;
}

.quick-link-title { font-weight: 600; color: var(--text-primary); }
.quick-link-desc { font-size: 0.85rem; color: var(--text-tertiary); }

.quick-link-icon {
  display: grid;
  place-items: center;
  width: 3rem;
  height: 3rem;
  border-radius: var(--radius-full);
  background: var(--gradient-brand);
  color: #fff;
  font-size: 1.25rem;
}

.icon-grid::before { content: "▦"; }
.icon-pen::before { content: "✎"; }
.icon-users::before { content: "☺"; }
.icon-user::before { content: "⌂"; }
.icon-login::before { content: "➜"; }

.featured-header { display: flex; align-items: baseline; justify-content: space-between; margin-bottom: var(--space-6); }

.home-footer { margin-top: auto; padding: var(--space-8) 0; background: var(--neutral-900); color: var(--neutral-400); font-size: 0.9rem; }

@media (max-width: 900px) {
  .quick-links-grid { grid-template-columns: repeat(2, 1fr); }
  .hero { min-height: 60vh; }
  .hero-dots { right: 50%; transform: translateX(50%); }
}
"#;
