/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
/// Response envelopes and return-code classification
pub mod envelope;
/// HTTP transport with authentication headers and error mapping
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
