//! Numbered-menu interactive shell over a catalog and a cart.

use anyhow::Result;
use partguard::{Cart, Catalog, CompatibilityResult};
use std::io::{BufRead, Write};

const MENU: &str = "\nPartGuard - Menu:
1) List products
2) Add product to cart (enter product number)
3) View cart
4) Check compatibility
5) Clear cart
0) Exit
Choose: ";

pub struct Shell<'a> {
    catalog: &'a Catalog,
    cart: Cart,
}

impl<'a> Shell<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Run until `0`, end of input, or a non-numeric menu choice.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        let mut lines = input.lines();

        loop {
            write!(out, "{}", MENU)?;
            out.flush()?;

            let choice = match lines.next().transpose()? {
                Some(line) => match line.trim().parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => break,
                },
                None => break,
            };

            match choice {
                0 => break,
                1 => self.list_products(out)?,
                2 => {
                    write!(out, "Enter product number to add: ")?;
                    out.flush()?;
                    let number = lines
                        .next()
                        .transpose()?
                        .and_then(|line| line.trim().parse::<usize>().ok());
                    self.add_product(number, out)?;
                }
                3 => self.view_cart(out)?,
                4 => {
                    let result = self.cart.check();
                    write_result(&result, out)?;
                }
                5 => {
                    self.cart.clear();
                    writeln!(out, "Cart cleared.")?;
                }
                _ => writeln!(out, "Unknown choice")?,
            }
        }

        writeln!(out, "Goodbye")?;
        Ok(())
    }

    fn list_products<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\nProducts:")?;
        for (i, part) in self.catalog.parts().iter().enumerate() {
            writeln!(out, "{}: {} (${:.2})", i + 1, part.name(), part.price())?;
        }
        Ok(())
    }

    fn add_product<W: Write>(&mut self, number: Option<usize>, out: &mut W) -> Result<()> {
        let catalog = self.catalog;
        match number.and_then(|n| catalog.get(n)) {
            Some(part) => {
                tracing::info!("Adding {} (id:{}) to cart", part.name(), part.id());
                writeln!(out, "Added: {}", part.name())?;
                self.cart.add(part.clone());
            }
            None => writeln!(out, "Invalid product number")?,
        }
        Ok(())
    }

    fn view_cart<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "\nCart items:")?;
        for (i, part) in self.cart.items().iter().enumerate() {
            writeln!(out, "{}: {}", i + 1, part.name())?;
        }
        writeln!(out, "Total: ${:.2}", self.cart.total_price())?;
        Ok(())
    }
}

pub fn write_result<W: Write>(result: &CompatibilityResult, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\nCompatibility result: {}",
        if result.ok { "OK" } else { "ISSUES" }
    )?;
    for message in &result.messages {
        writeln!(out, " - {}", message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_shell(input: &str) -> (String, usize) {
        let catalog = Catalog::seeded();
        let mut shell = Shell::new(&catalog);
        let mut out = Vec::new();
        shell.run(input.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), shell.cart().len())
    }

    #[test]
    fn test_exit_immediately() {
        let (out, items) = run_shell("0\n");
        assert!(out.contains("Choose: "));
        assert!(out.ends_with("Goodbye\n"));
        assert_eq!(items, 0);
    }

    #[test]
    fn test_eof_exits() {
        let (out, _) = run_shell("");
        assert!(out.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_non_numeric_choice_exits() {
        let (out, _) = run_shell("abc\n1\n");
        assert!(!out.contains("Products:"));
        assert!(out.ends_with("Goodbye\n"));
    }

    #[test]
    fn test_list_products() {
        let (out, _) = run_shell("1\n0\n");
        assert!(out.contains("1: AMD Ryzen 5 5600X ($199.99)"));
    }

    #[test]
    fn test_add_and_view_cart() {
        let (out, items) = run_shell("2\n1\n3\n0\n");
        assert!(out.contains("Added: AMD Ryzen 5 5600X"));
        assert!(out.contains("Cart items:\n1: AMD Ryzen 5 5600X"));
        assert!(out.contains("Total: $199.99"));
        assert_eq!(items, 1);
    }

    #[test]
    fn test_invalid_product_number() {
        let (out, items) = run_shell("2\n0\n2\n999\n2\nxyz\n0\n");
        assert_eq!(out.matches("Invalid product number").count(), 3);
        assert_eq!(items, 0);
    }

    #[test]
    fn test_unknown_choice() {
        let (out, _) = run_shell("9\n0\n");
        assert!(out.contains("Unknown choice"));
    }

    #[test]
    fn test_check_empty_cart() {
        let (out, _) = run_shell("4\n0\n");
        assert!(out.contains("Compatibility result: OK"));
        assert!(out.contains(" - Basic compatibility checks passed."));
    }

    #[test]
    fn test_check_socket_mismatch_then_clear() {
        // 1 = Ryzen 5 5600X (AM4), 5 = ASUS TUF B650-PLUS (AM5)
        let (out, items) = run_shell("2\n1\n2\n5\n4\n5\n0\n");
        assert!(out.contains("Compatibility result: ISSUES"));
        assert!(out.contains(" - CPU socket mismatch."));
        assert!(out.contains("Cart cleared."));
        assert_eq!(items, 0);
    }
}
