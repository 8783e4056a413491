//! C++ source emitter
//!
//! Renders one translation unit per asset defining its byte array, and the
//! aggregate `embedded_assets.hpp` / `embedded_assets.cpp` pair holding the
//! size constants, array declarations, lookup routine and the embedded
//! asset repository served to the engine at run time.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::entities::{Asset, GeneratedSource};
use crate::domain::ports::SourceEmitter;
use crate::domain::value_objects::OutputLayout;

const GENERATED_MARKER: &str = "// Generated by assetbake";
const GENERATED_BANNER: &str = "// Generated by assetbake. Do not edit.";

/// Names and layout knobs of the generated C++
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CppOptions {
    /// Namespace of the repository class (`A::B`), empty for global
    pub namespace: String,
    pub repository_class: String,
    /// Fully qualified engine interface the repository implements
    pub base_class: String,
    /// Header declaring `base_class`
    pub base_header: String,
    pub lookup_function: String,
    /// Byte values per line in per-asset arrays
    pub values_per_line: usize,
}

impl Default for CppOptions {
    fn default() -> Self {
        Self {
            namespace: "Game".to_string(),
            repository_class: "EmbeddedAssetRepository".to_string(),
            base_class: "Engine::AssetRepository".to_string(),
            base_header: "engine/assets/asset_repository.hpp".to_string(),
            lookup_function: "lookup_embedded_asset_from_name".to_string(),
            values_per_line: 24,
        }
    }
}

/// Emits C++17 sources
#[derive(Debug, Clone, Default)]
pub struct CppEmitter {
    options: CppOptions,
}

impl CppEmitter {
    pub fn new(options: CppOptions) -> Self {
        Self { options }
    }

    /// Size constants and array declarations, one pair per asset
    pub fn render_definitions(&self, assets: &[Asset]) -> String {
        let mut out = String::new();
        for asset in assets {
            let symbol = asset.symbol();
            let _ = writeln!(out, "constexpr std::size_t {}_size = {};", symbol, asset.len());
            let _ = writeln!(out, "extern const std::uint8_t {}[];", symbol);
        }
        out
    }

    /// The lookup routine: one comparison per asset, in request order
    pub fn render_lookup(&self, assets: &[Asset]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "static std::tuple<const std::uint8_t*, std::size_t> {}(std::string_view name)",
            self.options.lookup_function
        );
        out.push_str("{\n");
        for asset in assets {
            let symbol = asset.symbol();
            let _ = writeln!(
                out,
                "    if (name == \"{}\") return {{ {}, {}_size }};",
                escape_string_literal(&asset.path().lookup_key()),
                symbol,
                symbol
            );
        }
        out.push_str("    return { nullptr, 0 };\n");
        out.push_str("}\n");
        out
    }

    fn render_header(&self) -> String {
        let o = &self.options;
        let mut out = String::new();
        let _ = writeln!(out, "{}", GENERATED_BANNER);
        out.push_str("#pragma once\n\n");
        let _ = writeln!(out, "#include \"{}\"", escape_string_literal(&o.base_header));
        out.push_str("\n#include <istream>\n#include <memory>\n#include <string_view>\n\n");

        let class = format!(
            "class {cls} final : public {base}\n\
             {{\n\
             public:\n\
             \x20   static {cls} construct();\n\
             \x20   std::unique_ptr<std::istream> open(std::string_view name) const override;\n\
             \x20   std::shared_ptr<{base}> copy() const override;\n\
             \n\
             private:\n\
             \x20   explicit {cls}() = default;\n\
             }};\n",
            cls = o.repository_class,
            base = o.base_class,
        );

        if o.namespace.is_empty() {
            out.push_str(&class);
        } else {
            let _ = writeln!(out, "namespace {}\n{{\n", o.namespace);
            out.push_str(&class);
            let _ = writeln!(out, "\n}} // namespace {}", o.namespace);
        }
        out
    }

    fn render_source(&self, assets: &[Asset], layout: &OutputLayout) -> String {
        let o = &self.options;
        let header_name = layout
            .aggregate_header()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut out = String::new();
        let _ = writeln!(out, "{}", GENERATED_BANNER);
        let _ = writeln!(out, "#include \"{}\"", escape_string_literal(&header_name));
        out.push_str(
            "\n#include <cstddef>\n#include <cstdint>\n#include <iostream>\n\
             #include <memory>\n#include <string_view>\n#include <tuple>\n\n",
        );
        out.push_str(&self.render_definitions(assets));
        out.push('\n');
        out.push_str(&self.render_lookup(assets));
        out.push('\n');
        out.push_str(MEMORY_STREAM);
        out.push('\n');
        out.push_str(&self.render_repository());
        out
    }

    fn render_repository(&self) -> String {
        let o = &self.options;
        let qualified = if o.namespace.is_empty() {
            o.repository_class.clone()
        } else {
            format!("{}::{}", o.namespace, o.repository_class)
        };

        format!(
            "{q} {q}::construct()\n\
             {{\n\
             \x20   return {q}();\n\
             }}\n\
             \n\
             std::unique_ptr<std::istream> {q}::open(std::string_view name) const\n\
             {{\n\
             \x20   auto [buffer, length] = {lookup}(name);\n\
             \x20   if (buffer == nullptr)\n\
             \x20   {{\n\
             \x20       std::cerr << \"Error: Unknown asset '\" << name << \"'\\n\";\n\
             \x20       return nullptr;\n\
             \x20   }}\n\
             \n\
             \x20   return std::make_unique<MemoryStream>(buffer, length);\n\
             }}\n\
             \n\
             std::shared_ptr<{base}> {q}::copy() const\n\
             {{\n\
             \x20   return std::shared_ptr<{q}>(new {q}());\n\
             }}\n",
            q = qualified,
            lookup = o.lookup_function,
            base = o.base_class,
        )
    }
}

impl SourceEmitter for CppEmitter {
    fn render_asset(&self, asset: &Asset, path: &Path) -> GeneratedSource {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} from '{}'. Do not edit.",
            GENERATED_MARKER,
            comment_safe(asset.path().as_str())
        );
        out.push_str("#include <cstdint>\n\n");

        if asset.is_empty() {
            // Zero-length arrays are ill-formed; the size constant stays 0.
            let _ = writeln!(out, "extern const std::uint8_t {}[] = {{ 0 }};", asset.symbol());
            return GeneratedSource::new(path, out);
        }

        let _ = writeln!(out, "extern const std::uint8_t {}[] = {{", asset.symbol());
        for line in asset.content().chunks(self.options.values_per_line.max(1)) {
            out.push_str("   ");
            for byte in line {
                let _ = write!(out, " {},", byte);
            }
            out.push('\n');
        }
        out.push_str("};\n");

        GeneratedSource::new(path, out)
    }

    fn asset_stamp(&self, asset: &Asset) -> String {
        format!("cpp:{}:{}", asset.symbol(), self.options.values_per_line.max(1))
    }

    fn is_generated(&self, content: &str) -> bool {
        content.starts_with(GENERATED_MARKER)
    }

    fn render_aggregate(&self, assets: &[Asset], layout: &OutputLayout) -> Vec<GeneratedSource> {
        vec![
            GeneratedSource::new(layout.aggregate_header(), self.render_header()),
            GeneratedSource::new(layout.aggregate_source(), self.render_source(assets, layout)),
        ]
    }
}

/// Read-only seekable stream over an embedded byte range
const MEMORY_STREAM: &str = r#"namespace
{

class MemoryBuffer : public std::basic_streambuf<char>
{
public:
    MemoryBuffer(const std::uint8_t *buffer, std::size_t length)
    {
        char *begin = const_cast<char *>(reinterpret_cast<const char *>(buffer));
        setg(begin, begin, begin + length);
    }

private:
    std::streampos seekoff(std::streamoff offset, std::ios_base::seekdir way, std::ios_base::openmode) override
    {
        char *base = nullptr;
        switch (way)
        {
            case std::ios_base::beg:
                base = eback();
                break;
            case std::ios_base::cur:
                base = gptr();
                break;
            case std::ios_base::end:
                base = egptr();
                break;
            default:
                return std::streampos(std::streamoff(-1));
        }

        char *target = base + offset;
        if (target < eback() || target > egptr())
        {
            return std::streampos(std::streamoff(-1));
        }

        setg(eback(), target, egptr());
        return std::streampos(target - eback());
    }

    std::streampos seekpos(std::streampos position, std::ios_base::openmode mode) override
    {
        return seekoff(std::streamoff(position), std::ios_base::beg, mode);
    }
};

class MemoryStream : public std::istream
{
public:
    MemoryStream(const std::uint8_t *buffer, std::size_t length)
        : std::istream(nullptr)
        , m_buffer(buffer, length)
    {
        rdbuf(&m_buffer);
    }

private:
    MemoryBuffer m_buffer;
};

} // namespace
"#;

/// Escape `s` for use inside a C++ narrow string literal
///
/// Control bytes use 3-digit octal escapes, which cannot swallow following
/// characters the way `\x` escapes do.
pub fn escape_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Make `s` safe for a `//` line comment
fn comment_safe(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { '?' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::NormalizedName;
    use std::path::PathBuf;

    fn asset(path: &str, content: &[u8]) -> Asset {
        let name = NormalizedName::from_path(path);
        let symbol = name.symbol("");
        Asset::new(path, name, symbol, content.to_vec())
    }

    #[test]
    fn per_asset_source_defines_array_with_decimal_bytes() {
        let emitter = CppEmitter::default();
        let a = asset("ui/icon-1.png", &[137, 80, 78, 71]);

        let source = emitter.render_asset(&a, Path::new("gen/assets/ui_icon_1_png.cpp"));

        assert_eq!(source.path(), Path::new("gen/assets/ui_icon_1_png.cpp"));
        assert_eq!(
            source.content(),
            "// Generated by assetbake from 'ui/icon-1.png'. Do not edit.\n\
             #include <cstdint>\n\
             \n\
             extern const std::uint8_t ui_icon_1_png[] = {\n\
             \x20   137, 80, 78, 71,\n\
             };\n"
        );
    }

    #[test]
    fn stamp_tracks_symbol_and_line_width() {
        let a = asset("icon.png", b"png");
        let prefixed = Asset::new(
            "icon.png",
            NormalizedName::from_path("icon.png"),
            "res_icon_png",
            b"png".to_vec(),
        );
        let narrow = CppEmitter::new(CppOptions {
            values_per_line: 8,
            ..Default::default()
        });

        assert_eq!(CppEmitter::default().asset_stamp(&a), "cpp:icon_png:24");
        assert_eq!(CppEmitter::default().asset_stamp(&prefixed), "cpp:res_icon_png:24");
        assert_eq!(narrow.asset_stamp(&a), "cpp:icon_png:8");
    }

    #[test]
    fn generated_sources_are_recognized() {
        let emitter = CppEmitter::default();
        let source = emitter.render_asset(&asset("a.bin", b"a"), Path::new("a_bin.cpp"));

        assert!(emitter.is_generated(source.content()));
        assert!(!emitter.is_generated("#include <cstdint>
int main() {}
"));
    }

    #[test]
    fn per_asset_source_wraps_long_arrays() {
        let emitter = CppEmitter::new(CppOptions {
            values_per_line: 2,
            ..Default::default()
        });
        let a = asset("a.bin", &[1, 2, 3, 4, 5]);

        let source = emitter.render_asset(&a, Path::new("a_bin.cpp"));

        assert!(source
            .content()
            .ends_with("= {\n    1, 2,\n    3, 4,\n    5,\n};\n"));
    }

    #[test]
    fn empty_asset_emits_padding_element() {
        let emitter = CppEmitter::default();
        let a = asset("empty.txt", &[]);

        let source = emitter.render_asset(&a, Path::new("empty_txt.cpp"));

        assert!(source
            .content()
            .contains("extern const std::uint8_t empty_txt[] = { 0 };"));
        assert!(emitter
            .render_definitions(&[a])
            .contains("constexpr std::size_t empty_txt_size = 0;"));
    }

    #[test]
    fn definitions_follow_request_order() {
        let emitter = CppEmitter::default();
        let assets = vec![asset("b.bin", b"bb"), asset("a.bin", b"a")];

        assert_eq!(
            emitter.render_definitions(&assets),
            "constexpr std::size_t b_bin_size = 2;\n\
             extern const std::uint8_t b_bin[];\n\
             constexpr std::size_t a_bin_size = 1;\n\
             extern const std::uint8_t a_bin[];\n"
        );
    }

    #[test]
    fn lookup_matches_slash_prefixed_paths_then_falls_through() {
        let emitter = CppEmitter::default();
        let assets = vec![asset("a.bin", b"a"), asset("b.bin", b"b")];

        let lookup = emitter.render_lookup(&assets);

        let a = lookup.find("\"/a.bin\"").unwrap();
        let b = lookup.find("\"/b.bin\"").unwrap();
        let miss = lookup.find("return { nullptr, 0 };").unwrap();
        assert!(a < b && b < miss);
        assert!(lookup.contains("return { a_bin, a_bin_size };"));
        assert!(lookup.contains("return { b_bin, b_bin_size };"));
        assert!(!lookup.contains("/c.bin"));
    }

    #[test]
    fn lookup_escapes_quotes_and_backslashes() {
        let emitter = CppEmitter::default();
        let assets = vec![asset("odd\"name\\x", b"x")];

        let lookup = emitter.render_lookup(&assets);

        assert!(lookup.contains(r#"if (name == "/odd\"name\\x")"#));
    }

    #[test]
    fn aggregate_is_header_and_source() {
        let emitter = CppEmitter::default();
        let layout = OutputLayout::new("gen");
        let sources = emitter.render_aggregate(&[asset("a.bin", b"a")], &layout);

        let paths: Vec<PathBuf> = sources.iter().map(|s| s.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("gen/embedded_assets.hpp"),
                PathBuf::from("gen/embedded_assets.cpp")
            ]
        );

        let header = sources[0].content();
        assert!(header.contains("#pragma once"));
        assert!(header.contains("#include \"engine/assets/asset_repository.hpp\""));
        assert!(header.contains("namespace Game"));
        assert!(header
            .contains("class EmbeddedAssetRepository final : public Engine::AssetRepository"));

        let source = sources[1].content();
        assert!(source.contains("#include \"embedded_assets.hpp\""));
        assert!(source.contains("extern const std::uint8_t a_bin[];"));
        assert!(source.contains("auto [buffer, length] = lookup_embedded_asset_from_name(name);"));
        assert!(source.contains("Error: Unknown asset '"));
        assert!(source.contains("Game::EmbeddedAssetRepository Game::EmbeddedAssetRepository::construct()"));
    }

    #[test]
    fn global_namespace_is_supported() {
        let emitter = CppEmitter::new(CppOptions {
            namespace: String::new(),
            ..Default::default()
        });
        let sources = emitter.render_aggregate(&[], &OutputLayout::new("gen"));

        assert!(!sources[0].content().contains("namespace"));
        assert!(sources[1]
            .content()
            .contains("EmbeddedAssetRepository EmbeddedAssetRepository::construct()"));
    }

    #[test]
    fn empty_request_still_has_lookup_fallthrough() {
        let lookup = CppEmitter::default().render_lookup(&[]);
        assert!(lookup.contains("return { nullptr, 0 };"));
        assert!(!lookup.contains("if (name =="));
    }

    #[test]
    fn escape_control_characters_as_octal() {
        assert_eq!(escape_string_literal("a\u{1}b"), "a\\001b");
        assert_eq!(escape_string_literal("tab\there"), "tab\\there");
        assert_eq!(escape_string_literal("plain/path.png"), "plain/path.png");
    }
}
