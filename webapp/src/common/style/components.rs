pub const BASE_COMPONENTS: &str = r#"
.btn {
  display: inline-flex;
  align-items: center;
  gap: var(--space-2);
  padding: 0.6rem 1.4rem;
  border: 1px solid transparent;
  border-radius: var(--radius-full);
  font: 600 0.95rem var(--font-body);
  letter-spacing: 0.01em;
  cursor: pointer;
  transition: all var(--transition-fast) var(--easing-standard);
}

.btn:focus-visible { outline: 3px solid var(--primary-light); outline-offset: 2px; }
.btn:disabled { opacity: 0.45; cursor: default; }

.btn-primary { background: var(--gradient-brand); color: #fff; box-shadow: var(--shadow-sm); }
.btn-primary:hover:not(:disabled) { box-shadow: var(--shadow-lg); }

.btn-secondary { background: var(--surface); border-color: var(--border); color: var(--text-primary); }
.btn-secondary:hover:not(:disabled) { border-color: var(--primary-light); color: var(--primary-dark); }

.btn-link { background: transparent; color: var(--primary-dark); padding-inline: var(--space-2); }

.btn-sm { padding: 0.35rem 1rem; font-size: 0.85rem; }
.btn-lg { padding: 0.85rem 2rem; font-size: 1.05rem; }

/* Form Elements */
.form-card {
  max-width: 420px;
  margin: var(--space-12) auto;
  padding: var(--space-8);
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-md);
}

.form-group {
  margin-bottom: var(--space-4);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  width: 100%;
  padding: var(--space-2) var(--space-3);
  border: 1px solid var(--border);
  border-radius: var(--radius-md);
  background-color: var(--surface);
  color: var(--text-primary);
}

.form-input:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(236, 72, 153, 0.2);
  outline: none;
}

.form-footer {
  margin-top: var(--space-4);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.status-message {
  display: block;
  min-height: 1.5em;
  margin-top: var(--space-3);
  color: var(--text-secondary);
}

.status-message.error {
  color: var(--error);
}

/* Portfolio */
.portfolio-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
}

.portfolio-card {
  display: block;
  background-color: var(--surface);
  border-radius: var(--radius-lg);
  overflow: hidden;
  box-shadow: var(--shadow-sm);
  color: var(--text-primary);
}

.portfolio-card:hover {
  text-decoration: none;
}

.portfolio-card-image {
  position: relative;
  overflow: hidden;
}

.portfolio-card-image img {
  width: 100%;
  aspect-ratio: 4/3;
  object-fit: cover;
}

.portfolio-card-like {
  position: absolute;
  top: var(--space-3);
  right: var(--space-3);
  color: var(--primary);
  background-color: white;
  border-radius: var(--radius-full);
  padding: var(--space-1) var(--space-2);
}

.portfolio-card-info {
  padding: var(--space-4);
}

.portfolio-card-info .category {
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--primary);
}

.portfolio-card-info .title {
  font-weight: 600;
  margin: var(--space-1) 0;
}

.portfolio-card-info .meta {
  display: flex;
  justify-content: space-between;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.chip-row {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
  margin-bottom: var(--space-6);
}

.chip {
  border: 1px solid var(--border);
  background-color: var(--surface);
  border-radius: var(--radius-full);
  padding: var(--space-1) var(--space-3);
  cursor: pointer;
  font-size: 0.875rem;
}

.chip.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: white;
}

.detail-layout {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: var(--space-8);
}

.detail-layout img.detail-image {
  width: 100%;
  border-radius: var(--radius-lg);
}

.designer {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin: var(--space-4) 0;
}

.designer img {
  width: 48px;
  height: 48px;
  border-radius: var(--radius-full);
  object-fit: cover;
}

.request-summary {
  margin-top: var(--space-6);
  padding: var(--space-4);
  border-radius: var(--radius-md);
  background-color: rgba(16, 185, 129, 0.08);
}

@media (max-width: 768px) {
  .detail-layout {
    grid-template-columns: 1fr;
  }
}

/* Style selection */
.style-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(160px, 1fr));
  gap: var(--space-3);
}

.style-option {
  position: relative;
  border: 2px solid transparent;
  border-radius: var(--radius-md);
  overflow: hidden;
  padding: 0;
  background: var(--surface);
  cursor: pointer;
  text-align: left;
  font-family: inherit;
}

.style-option img {
  width: 100%;
  aspect-ratio: 4/3;
  object-fit: cover;
  display: block;
}

.style-option span {
  display: block;
  padding: var(--space-2);
  font-size: 0.875rem;
}

.style-option.selected {
  border-color: var(--primary);
}

.style-option.selected::after {
  content: "✓";
  position: absolute;
  top: var(--space-2);
  right: var(--space-2);
  width: 24px;
  height: 24px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
  color: white;
  text-align: center;
}

.style-option:disabled {
  cursor: not-allowed;
  opacity: 0.4;
}

.selection-count {
  margin-right: auto;
  color: var(--text-secondary);
}

.empty-state {
  padding: var(--space-8);
  text-align: center;
  color: var(--text-tertiary);
}

.skeleton {
  height: 1em;
  border-radius: var(--radius-md);
  background: linear-gradient(100deg, var(--neutral-100) 30%, var(--primary-tint) 50%, var(--neutral-100) 70%);
  background-size: 300% 100%;
  animation: sh-shimmer 1.4s linear infinite;
}

@keyframes sh-shimmer {
  from { background-position: 100% 0; }
  to { background-position: -100% 0; }
}

.container { max-width: var(--container-width); margin-inline: auto; padding-inline: var(--space-6); }

.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: grid;
  place-items: center;
  padding: var(--space-4);
  background: rgba(28, 25, 23, 0.45);
  backdrop-filter: blur(4px);
}

.modal-overlay:focus { outline: none; }

.modal-content {
  width: 100%;
  max-height: 88vh;
  display: flex;
  flex-direction: column;
  background: var(--surface-raised);
  border-radius: var(--radius-lg);
  box-shadow: var(--shadow-lg);
  overflow: hidden;
}

.modal-header, .modal-footer {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  padding: var(--space-4) var(--space-6);
}

.modal-header { justify-content: space-between; border-bottom: 1px solid var(--border); }
.modal-title { font-size: 1.35rem; }
.modal-body { padding: var(--space-6); overflow-y: auto; }
.modal-footer { justify-content: flex-end; background: var(--neutral-50); border-top: 1px solid var(--border); }

.btn-close {
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: var(--radius-full);
  background: transparent;
  color: var(--text-tertiary);
  font-size: 1.4rem;
  line-height: 1;
  cursor: pointer;
}

.btn-close:hover { background: var(--neutral-100); color: var(--text-primary); }
"#;

// keyframes named by common::motion, plus the hover and tap responses
pub const MOTION_KEYFRAMES: &str = r#"
@keyframes sh-fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

@keyframes sh-fade-up {
  from { transform: translateY(20px); opacity: 0; }
  to { transform: translateY(0); opacity: 1; }
}

@keyframes sh-scale-in {
  from { transform: scale(0.95); opacity: 0; }
  to { transform: scale(1); opacity: 1; }
}

@keyframes sh-slide-in {
  from { transform: translateX(40px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}

.lift-on-hover {
  transition: transform var(--transition-normal) var(--easing-standard),
              box-shadow var(--transition-normal) var(--easing-standard);
}

.lift-on-hover:hover {
  transform: translateY(-4px);
  box-shadow: var(--shadow-md);
}

.press-on-tap:active {
  transform: scale(0.97);
}

@media (prefers-reduced-motion: reduce) {
  * {
    animation: none !important;
    transition: none !important;
  }
}
"#;
