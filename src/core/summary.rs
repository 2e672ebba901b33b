/// Price and the index of its first occurrence.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extreme {
    pub index: usize,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use]
pub struct Summary {
    pub min: Extreme,
    pub max: Extreme,
    pub mean: f64,
}

impl Summary {
    /// Summarize the prices, or `None` if there are none.
    pub fn from_prices(prices: impl IntoIterator<Item = f64>) -> Option<Self> {
        let mut prices = prices.into_iter().enumerate();
        let (_, first) = prices.next()?;
        let mut summary = Self {
            min: Extreme { index: 0, price: first },
            max: Extreme { index: 0, price: first },
            mean: 0.0,
        };
        let mut total = first;
        let mut count = 1_u32;
        for (index, price) in prices {
            if price < summary.min.price {
                summary.min = Extreme { index, price };
            }
            if price > summary.max.price {
                summary.max = Extreme { index, price };
            }
            total += price;
            count += 1;
        }
        summary.mean = total / f64::from(count);
        Some(summary)
    }
}
