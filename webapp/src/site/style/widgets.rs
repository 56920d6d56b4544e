// styles for the elements the enhancement layer injects into the page
pub const WIDGET_STYLES: &str = r#"
/* Particle background */
canvas.bg-animation {
  position: fixed;
  inset: 0;
  z-index: var(--z-canvas);
  pointer-events: none;
}

/* Back to top */
.back-to-top {
  position: fixed;
  right: 24px;
  bottom: 24px;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.back-to-top.show {
  opacity: 1;
  pointer-events: auto;
}

/* Cursor follower */
.interactive-cursor {
  position: fixed;
  width: 16px;
  height: 16px;
  margin: -8px 0 0 -8px;
  border-radius: 50%;
  border: 2px solid var(--accent);
  pointer-events: none;
  z-index: var(--z-cursor);
  transition: transform var(--transition-fast) var(--easing-standard);
}

.interactive-cursor.hover {
  transform: scale(2);
}

/* Modal overlay */
.overlay {
  position: fixed;
  inset: 0;
  background: var(--overlay-bg);
  opacity: 0;
  pointer-events: none;
  z-index: var(--z-overlay);
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.overlay.show {
  opacity: 1;
  pointer-events: auto;
}

/* Tooltips */
[data-tooltip] {
  position: relative;
}

.tooltip {
  position: absolute;
  bottom: 100%;
  left: 50%;
  transform: translateX(-50%);
  white-space: nowrap;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-fast) var(--easing-standard);
}

[data-tooltip]:hover .tooltip {
  opacity: 1;
}

/* Ripples */
button, .btn {
  position: relative;
  overflow: hidden;
}

.ripple {
  position: absolute;
  width: 8px;
  height: 8px;
  margin: -4px 0 0 -4px;
  border-radius: 50%;
  background: currentColor;
  opacity: 0.4;
  pointer-events: none;
  animation: ripple 600ms ease-out forwards;
}

@keyframes ripple {
  to {
    transform: scale(30);
    opacity: 0;
  }
}

/* Toasts */
.toast {
  position: fixed;
  left: 50%;
  bottom: 32px;
  transform: translate(-50%, 20px);
  padding: 12px 20px;
  border-radius: 8px;
  background: var(--toast-bg);
  color: var(--toast-fg);
  opacity: 0;
  z-index: var(--z-toast);
  transition: opacity var(--transition-normal) var(--easing-standard),
              transform var(--transition-normal) var(--easing-standard);
}

.toast.show {
  opacity: 1;
  transform: translate(-50%, 0);
}
"#;
