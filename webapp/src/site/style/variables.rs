// fallbacks only, a site stylesheet that defines these wins
pub const CSS_VARIABLES: &str = r#"
:root {
  --accent: #8B5CF6;
  --glass: rgba(255, 255, 255, 0.08);
  --toast-bg: rgba(17, 24, 39, 0.92);
  --toast-fg: #F9FAFB;
  --overlay-bg: rgba(0, 0, 0, 0.55);
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
  --z-canvas: -1;
  --z-overlay: 900;
  --z-toast: 1000;
  --z-cursor: 1100;
}
"#;
