// design tokens shared by every stylesheet; pink brand on warm neutrals
pub const CSS_VARIABLES: &str = r#"
:root {
  --primary: #EC4899;
  --primary-light: #F9A8D4;
  --primary-dark: #BE185D;
  --primary-tint: #FDF2F8;
  --accent: #F59E0B;
  --gradient-brand: linear-gradient(135deg, #EC4899 0%, #F472B6 50%, #FB923C 100%);

  --neutral-50: #FAFAF9;
  --neutral-100: #F5F5F4;
  --neutral-200: #E7E5E4;
  --neutral-300: #D6D3D1;
  --neutral-400: #A8A29E;
  --neutral-500: #78716C;
  --neutral-600: #57534E;
  --neutral-700: #44403C;
  --neutral-800: #292524;
  --neutral-900: #1C1917;

  --error: #DC2626;
  --success: #059669;

  --background: var(--neutral-50);
  --surface: #FFFFFF;
  --surface-raised: #FFFFFF;
  --border: var(--neutral-200);

  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-tertiary: var(--neutral-500);

  --font-body: "Inter", system-ui, -apple-system, "Segoe UI", sans-serif;
  --font-display: "Playfair Display", Georgia, serif;

  --header-height: 72px;
  --container-width: 1180px;

  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-5: 1.25rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;

  --radius-md: 10px;
  --radius-lg: 18px;
  --radius-full: 999px;

  --shadow-sm: 0 1px 3px rgba(28, 25, 23, 0.06);
  --shadow-md: 0 8px 20px -6px rgba(28, 25, 23, 0.12);
  --shadow-lg: 0 24px 48px -12px rgba(190, 24, 93, 0.25);

  --transition-fast: 160ms;
  --transition-normal: 320ms;
  --easing-standard: cubic-bezier(0.22, 1, 0.36, 1);
}
"#;
