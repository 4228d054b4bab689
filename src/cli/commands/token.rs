use anyhow::Context;
use clap::Args;

use crate::auth::{generate_jwt, Claims};

#[derive(Args, Debug)]
pub struct TokenArgs {
    #[arg(help = "User id to embed in the token")]
    pub user_id: String,

    #[arg(long, help = "Token lifetime in hours (defaults to SECURITY_JWT_EXPIRY_HOURS or 168)")]
    pub hours: Option<u64>,

    #[arg(long, conflicts_with = "hours", help = "Issue a token without an exp claim")]
    pub no_expiry: bool,
}

const DEFAULT_EXPIRY_HOURS: u64 = 24 * 7;

pub fn handle(args: TokenArgs) -> anyhow::Result<()> {
    let secret = std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
    let token = issue(&args, &secret, default_hours())?;
    println!("{}", token);
    Ok(())
}

fn default_hours() -> u64 {
    std::env::var("SECURITY_JWT_EXPIRY_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_EXPIRY_HOURS)
}

fn issue(args: &TokenArgs, secret: &str, default_hours: u64) -> anyhow::Result<String> {
    let claims = if args.no_expiry {
        Claims::without_expiry(args.user_id.clone())
    } else {
        Claims::new(args.user_id.clone(), args.hours.unwrap_or(default_hours))
    };
    Ok(generate_jwt(&claims, secret)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_jwt;

    #[test]
    fn issued_tokens_verify() {
        let args = TokenArgs {
            user_id: "u1".into(),
            hours: Some(2),
            no_expiry: false,
        };
        let token = issue(&args, "secret", DEFAULT_EXPIRY_HOURS).unwrap();
        let claims = verify_jwt(&token, "secret").unwrap();
        assert_eq!(claims.id, "u1");
        assert!(claims.exp.is_some());
    }

    #[test]
    fn no_expiry_omits_exp() {
        let args = TokenArgs {
            user_id: "u1".into(),
            hours: None,
            no_expiry: true,
        };
        let token = issue(&args, "secret", DEFAULT_EXPIRY_HOURS).unwrap();
        assert_eq!(verify_jwt(&token, "secret").unwrap().exp, None);
    }
}
