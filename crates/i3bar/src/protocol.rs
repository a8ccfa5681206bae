//! The i3bar JSON protocol: a header, then an endless array of status
//! lines on stdout; click events come back as an endless array on stdin.

use crate::markup;
use mybar_core::{BarError, Click, MouseButton, Result};
use mybar_renderer::Rendered;
use mybar_theme::Theme;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// First line of the protocol.
#[derive(Debug, Clone, Serialize)]
pub struct Header {
    pub version:      u32,
    pub click_events: bool,
}

impl Default for Header {
    fn default() -> Self {
        Self { version: 1, click_events: true }
    }
}

/// One block of a status line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub full_text: String,
    pub name:      String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance:  Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color:     Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub urgent:    bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup:    Option<&'static str>,
    pub separator: bool,
    pub separator_block_width: u32,
}

impl Block {
    pub fn from_rendered(rendered: &Rendered, theme: &Theme) -> Self {
        let out = &rendered.output;
        let (full_text, markup) = if out.has_markup() {
            (markup::render(&out.spans), Some("pango"))
        } else {
            (out.plain_text(), None)
        };

        Self {
            full_text,
            name:      rendered.name.clone(),
            instance:  rendered.instance.clone(),
            color:     out.color.map(|c| c.to_hex()),
            urgent:    out.urgent,
            markup,
            separator: theme.separator,
            separator_block_width: theme.separator_block_width,
        }
    }
}

/// Writes the status stream, skipping lines identical to the previous one.
pub struct StatusWriter<W> {
    out:  W,
    last: Option<String>,
}

impl<W: AsyncWrite + Unpin> StatusWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// Send the header and open the status array.
    pub async fn start(&mut self, header: &Header) -> Result<()> {
        let header = serde_json::to_string(header)
            .map_err(|e| BarError::Protocol(format!("encode header: {e}")))?;
        self.out.write_all(format!("{header}\n[\n").as_bytes()).await?;
        self.out.flush().await?;
        Ok(())
    }

    /// Send one status line.  Returns `false` if it matched the last one and
    /// was not written.
    pub async fn write(&mut self, blocks: &[Block]) -> Result<bool> {
        let line = serde_json::to_string(blocks)
            .map_err(|e| BarError::Protocol(format!("encode status: {e}")))?;
        if self.last.as_deref() == Some(line.as_str()) {
            return Ok(false);
        }

        let prefix = if self.last.is_some() { "," } else { "" };
        self.out.write_all(format!("{prefix}{line}\n").as_bytes()).await?;
        self.out.flush().await?;
        self.last = Some(line);
        Ok(true)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Click event as i3bar reports it.  Extra fields (coordinates, modifiers)
/// are ignored.
#[derive(Debug, Deserialize)]
struct ClickEvent {
    #[serde(default)]
    name:     Option<String>,
    #[serde(default)]
    instance: Option<String>,
    button:   u8,
}

/// Decode one line of the click stream.
///
/// The opening `[`, separating commas and blank lines yield `Ok(None)`,
/// as do clicks on blocks without a name.
pub fn parse_click(line: &str) -> Result<Option<Click>> {
    let line = line.trim().trim_start_matches('[').trim_start_matches(',').trim();
    if line.is_empty() {
        return Ok(None);
    }

    let event: ClickEvent = serde_json::from_str(line)
        .map_err(|e| BarError::Protocol(format!("bad click event: {e}")))?;

    Ok(event.name.map(|name| Click {
        name,
        instance: event.instance,
        button:   MouseButton::from(event.button),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mybar_widgets::{spacer, Output, Span};

    fn rendered(output: Output) -> Rendered {
        Rendered { name: "clock".into(), instance: None, output }
    }

    #[test]
    fn plain_block_has_no_markup() {
        let block = Block::from_rendered(&rendered(Output::text("1.00 2.00")), &Theme::default());
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(
            json,
            r#"{"full_text":"1.00 2.00","name":"clock","separator":true,"separator_block_width":9}"#
        );
    }

    #[test]
    fn styled_block_uses_pango() {
        let theme = Theme::default();
        let out = Output::new(vec![Span::text("a"), spacer(), Span::text("b")])
            .color(theme.color("bad"))
            .urgent(true);
        let block = Block::from_rendered(&rendered(out), &theme);
        assert_eq!(block.markup, Some("pango"));
        assert_eq!(block.color.as_deref(), Some("#dd6666"));
        assert!(block.urgent);
        assert_eq!(block.full_text, "a<span size=\"xx-small\"> </span>b");
    }

    #[tokio::test]
    async fn stream_layout() {
        let mut writer = StatusWriter::new(Vec::new());
        writer.start(&Header::default()).await.unwrap();

        let block = Block::from_rendered(&rendered(Output::text("x")), &Theme::default());
        assert!(writer.write(&[block.clone()]).await.unwrap());
        assert!(!writer.write(&[block.clone()]).await.unwrap());
        let mut other = block;
        other.full_text = "y".into();
        assert!(writer.write(&[other]).await.unwrap());

        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], r#"{"version":1,"click_events":true}"#);
        assert_eq!(lines[1], "[");
        assert!(lines[2].starts_with(r#"[{"full_text":"x""#));
        assert!(lines[3].starts_with(r#",[{"full_text":"y""#));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn click_stream_lines() {
        assert!(parse_click("[").unwrap().is_none());
        assert!(parse_click("").unwrap().is_none());

        let click = parse_click(r#"{"name":"clock","button":1,"x":1820,"y":10}"#)
            .unwrap()
            .unwrap();
        assert_eq!(click.name, "clock");
        assert_eq!(click.button, MouseButton::Left);
        assert!(click.instance.is_none());

        let click = parse_click(r#",{"name":"volume","instance":"default","button":4}"#)
            .unwrap()
            .unwrap();
        assert_eq!(click.instance.as_deref(), Some("default"));
        assert_eq!(click.button, MouseButton::ScrollUp);

        // First event may share the line with the opening bracket.
        let click = parse_click(r#"[{"name":"meminfo","button":3}"#).unwrap().unwrap();
        assert_eq!(click.button, MouseButton::Right);
    }

    #[test]
    fn nameless_and_broken_clicks() {
        assert!(parse_click(r#"{"button":1}"#).unwrap().is_none());
        assert!(matches!(parse_click("{oops"), Err(BarError::Protocol(_))));
    }
}
