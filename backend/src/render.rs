use std::fmt::{self, Display, Write};

use shared::models::Cat;

/// Builds the listing page. Each cat gets a button that posts its position
/// as the `cat` form field.
pub fn render_index(cats: &[Cat]) -> Result<String, fmt::Error> {
    let mut page = String::with_capacity(1024 + cats.len() * 384);

    page.push_str(concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "  <meta charset=\"utf-8\">\n",
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        "  <title>Cat Rank</title>\n",
        "  <link rel=\"stylesheet\" href=\"/style.css\">\n",
        "</head>\n",
        "<body>\n",
        "  <header><h1>Vote for your favourite cat</h1></header>\n",
        "  <form method=\"post\" action=\"/\">\n",
        "    <ul class=\"cats\">\n",
    ));

    for (index, cat) in cats.iter().enumerate() {
        render_cat(&mut page, index, cat)?;
    }

    page.push_str("    </ul>\n  </form>\n</body>\n</html>\n");
    Ok(page)
}

fn render_cat(page: &mut String, index: usize, cat: &Cat) -> fmt::Result {
    let name = Escaped(cat.name());

    writeln!(page, "      <li class=\"cat\">")?;
    if cat.image_url().is_empty() {
        writeln!(page, "        <div class=\"no-image\" aria-hidden=\"true\">🐈</div>")?;
    } else {
        writeln!(
            page,
            "        <img src=\"{}\" alt=\"{}\">",
            Escaped(cat.image_url()),
            name
        )?;
    }
    writeln!(page, "        <h2>{}</h2>", name)?;
    writeln!(
        page,
        "        <p class=\"votes\">{} {}</p>",
        cat.votes(),
        if cat.votes() == 1 { "vote" } else { "votes" }
    )?;
    writeln!(
        page,
        "        <button type=\"submit\" name=\"cat\" value=\"{}\">Vote for {}</button>",
        index, name
    )?;
    writeln!(page, "      </li>")
}

struct Escaped<'a>(&'a str);

impl Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match c {
                '&' => f.write_str("&amp;")?,
                '<' => f.write_str("&lt;")?,
                '>' => f.write_str("&gt;")?,
                '"' => f.write_str("&quot;")?,
                '\'' => f.write_str("&#39;")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
