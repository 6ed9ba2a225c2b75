mod stripe_checkout;

pub use stripe_checkout::StripeCheckout;
